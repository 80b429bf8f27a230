#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use tower::ServiceExt;

use hrms_api::application::ports::employee_repository::EmployeeRepository;
use hrms_api::bootstrap::app_context::{AppContext, AppServices};
use hrms_api::bootstrap::config::Config;
use hrms_api::domain::employees::employee::{Employee, EmployeeFields};
use hrms_api::infrastructure::db::repositories::employee_repository_memory::InMemoryEmployeeRepository;
use hrms_api::presentation::http::build_router;

pub fn app_with(repo: Arc<dyn EmployeeRepository>) -> Router {
    build_router(AppContext::new(Config::default(), AppServices::new(repo)))
}

pub fn memory_app() -> Router {
    app_with(Arc::new(InMemoryEmployeeRepository::new()))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(json!(null))
    }
}

pub async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };
    send_request(app, builder.body(body).unwrap()).await
}

pub async fn send_raw(app: &Router, method: &str, path: &str, raw: &str) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    send_request(app, req).await
}

async fn send_request(app: &Router, req: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Creates an employee and returns the response body.
pub async fn create(app: &Router, body: Value) -> Value {
    let res = send(app, "POST", "/employee", Some(body)).await;
    assert_eq!(res.status, StatusCode::CREATED, "create failed: {}", res.text);
    res.json()
}

/// Fails every call and counts how often it was reached.
#[derive(Default)]
pub struct FailingRepository {
    pub calls: AtomicUsize,
}

impl FailingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> anyhow::Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("server selection timeout: no available servers")
    }
}

#[async_trait]
impl EmployeeRepository for FailingRepository {
    async fn list(&self) -> anyhow::Result<Vec<Employee>> {
        self.fail()
    }
    async fn insert(&self, _fields: &EmployeeFields) -> anyhow::Result<ObjectId> {
        self.fail()
    }
    async fn get_by_id(&self, _id: ObjectId) -> anyhow::Result<Option<Employee>> {
        self.fail()
    }
    async fn replace_fields(&self, _id: ObjectId, _fields: &EmployeeFields) -> anyhow::Result<bool> {
        self.fail()
    }
    async fn delete(&self, _id: ObjectId) -> anyhow::Result<u64> {
        self.fail()
    }
    async fn ping(&self) -> anyhow::Result<()> {
        self.fail()
    }
}
