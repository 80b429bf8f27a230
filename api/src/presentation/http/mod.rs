use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

pub mod employees;
pub mod error;
pub mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        employees::list_employees,
        employees::create_employee,
        employees::update_employee,
        employees::delete_employee,
        health::health,
    ),
    components(schemas(
        employees::Employee,
        employees::EmployeeRequest,
        employees::DeleteEmployeeResponse,
        health::HealthResp,
    )),
    tags(
        (name = "Employees", description = "Employee records"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;

/// Full HTTP surface: employee routes, health, docs and the shared layers.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = cors_layer(&ctx.cfg);
    let body_limit = ctx.cfg.body_max_bytes;

    Router::new()
        .merge(employees::routes(ctx.clone()))
        .merge(health::routes(ctx))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}

fn cors_layer(cfg: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE]);

    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin),
        Some(Err(_)) | None if cfg.is_production => {
            // Nothing valid configured: deny cross-origin callers
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
        }
        _ => base.allow_origin(AllowOrigin::mirror_request()),
    }
}
