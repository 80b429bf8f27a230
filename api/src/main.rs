use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use hrms_api::application::ports::employee_repository::EmployeeRepository;
use hrms_api::bootstrap::app_context::{AppContext, AppServices};
use hrms_api::bootstrap::config::{Config, StoreBackend};
use hrms_api::infrastructure::db::repositories::employee_repository_memory::InMemoryEmployeeRepository;
use hrms_api::infrastructure::db::repositories::employee_repository_mongo::MongoEmployeeRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "hrms_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        api_port = cfg.api_port,
        store = ?cfg.store_backend,
        production = cfg.is_production,
        "Starting HRMS employee service"
    );

    let employee_repo: Arc<dyn EmployeeRepository> = match cfg.store_backend {
        StoreBackend::Mongo => {
            let db = hrms_api::infrastructure::db::connect_database(&cfg)
                .await
                .inspect_err(|e| tracing::error!(error = ?e, "mongodb_connect_failed"))?;
            Arc::new(MongoEmployeeRepository::new(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("employee_store_in_memory");
            Arc::new(InMemoryEmployeeRepository::new())
        }
    };

    let ctx = AppContext::new(cfg.clone(), AppServices::new(employee_repo));
    let app = hrms_api::presentation::http::build_router(ctx);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown_signal_received");
}
