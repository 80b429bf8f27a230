use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::employees::create_employee::CreateEmployee;
use crate::application::use_cases::employees::delete_employee::DeleteEmployee;
use crate::application::use_cases::employees::list_employees::ListEmployees;
use crate::application::use_cases::employees::update_employee::UpdateEmployee;
use crate::bootstrap::app_context::AppContext;
use crate::domain::employees::employee::{self as domain, EmployeeFields, parse_employee_id};
use crate::presentation::http::error::ApiError;

pub const DELETED_MESSAGE: &str = "Employee successfully deleted";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl From<domain::Employee> for Employee {
    fn from(e: domain::Employee) -> Self {
        Employee {
            id: e.id.to_hex(),
            name: e.name,
            salary: e.salary,
            age: e.age,
        }
    }
}

/// Body for create and update. Any `id` sent by the client is ignored;
/// absent or null fields become empty/zero.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EmployeeRequest {
    pub name: Option<String>,
    pub salary: Option<f64>,
    pub age: Option<f64>,
}

impl From<EmployeeRequest> for EmployeeFields {
    fn from(r: EmployeeRequest) -> Self {
        EmployeeFields {
            name: r.name.unwrap_or_default(),
            salary: r.salary.unwrap_or_default(),
            age: r.age.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteEmployeeResponse {
    pub message: String,
}

#[utoipa::path(get, path = "/employee", tag = "Employees",
    responses((status = 200, body = [Employee]), (status = 500, description = "Store error")))]
pub async fn list_employees(State(ctx): State<AppContext>) -> Result<Json<Vec<Employee>>, ApiError> {
    let repo = ctx.employee_repo();
    let uc = ListEmployees {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await.map_err(|e| {
        tracing::error!(error = ?e, "employee_list_failed");
        ApiError::from(e)
    })?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/employee", tag = "Employees", request_body = EmployeeRequest,
    responses(
        (status = 201, body = Employee),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Store error")
    ))]
pub async fn create_employee(
    State(ctx): State<AppContext>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(req) = payload?;
    let fields = EmployeeFields::from(req);

    let repo = ctx.employee_repo();
    let uc = CreateEmployee {
        repo: repo.as_ref(),
    };
    let created = uc.execute(&fields).await.map_err(|e| {
        tracing::error!(error = ?e, "employee_create_failed");
        ApiError::from(e)
    })?;
    tracing::debug!(employee_id = %created.id, "employee_created");
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(put, path = "/employee/{id}", tag = "Employees", request_body = EmployeeRequest,
    params(("id" = String, Path, description = "Employee ObjectId (hex)")),
    responses(
        (status = 200, body = Employee),
        (status = 400, description = "Malformed id or body"),
        (status = 404, description = "No such employee"),
        (status = 500, description = "Store error")
    ))]
pub async fn update_employee(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_employee_id(&raw_id)?;
    let Json(req) = payload?;

    let repo = ctx.employee_repo();
    let uc = UpdateEmployee {
        repo: repo.as_ref(),
    };
    let updated = uc
        .execute(id, req.into())
        .await
        .map_err(|e| {
            tracing::error!(employee_id = %id, error = ?e, "employee_update_failed");
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound(format!("employee {id} not found")))?;
    Ok(Json(updated.into()))
}

#[utoipa::path(delete, path = "/employee/{id}", tag = "Employees",
    params(("id" = String, Path, description = "Employee ObjectId (hex)")),
    responses(
        (status = 200, body = DeleteEmployeeResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No such employee"),
        (status = 500, description = "Store error")
    ))]
pub async fn delete_employee(
    State(ctx): State<AppContext>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteEmployeeResponse>, ApiError> {
    let id = parse_employee_id(&raw_id)?;

    let repo = ctx.employee_repo();
    let uc = DeleteEmployee {
        repo: repo.as_ref(),
    };
    let deleted = uc.execute(id).await.map_err(|e| {
        tracing::error!(employee_id = %id, error = ?e, "employee_delete_failed");
        ApiError::from(e)
    })?;
    if !deleted {
        return Err(ApiError::NotFound(format!("employee {id} not found")));
    }
    Ok(Json(DeleteEmployeeResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/employee", get(list_employees).post(create_employee))
        .route("/employee/:id", put(update_employee).delete(delete_employee))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ignores_client_id_and_defaults_missing_fields() {
        let req: EmployeeRequest =
            serde_json::from_str(r#"{"id":"abc","name":"Ada","salary":null}"#).unwrap();
        let fields = EmployeeFields::from(req);
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.salary, 0.0);
        assert_eq!(fields.age, 0.0);
    }

    #[test]
    fn employee_renders_hex_id() {
        let id = mongodb::bson::oid::ObjectId::new();
        let out = Employee::from(domain::Employee {
            id,
            name: "Ada".into(),
            salary: 10.5,
            age: 36.0,
        });
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["id"], id.to_hex());
        assert_eq!(json["salary"], 10.5);
    }
}
