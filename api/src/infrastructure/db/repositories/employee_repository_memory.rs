use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::{Employee, EmployeeFields};

/// Process-local store used for `EMPLOYEE_STORE=memory` and tests.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(&self) -> anyhow::Result<Vec<Employee>> {
        Ok(self.rows.read().await.clone())
    }

    async fn insert(&self, fields: &EmployeeFields) -> anyhow::Result<ObjectId> {
        let id = ObjectId::new();
        self.rows
            .write()
            .await
            .push(Employee::from_fields(id, fields.clone()));
        Ok(id)
    }

    async fn get_by_id(&self, id: ObjectId) -> anyhow::Result<Option<Employee>> {
        Ok(self.rows.read().await.iter().find(|e| e.id == id).cloned())
    }

    async fn replace_fields(&self, id: ObjectId, fields: &EmployeeFields) -> anyhow::Result<bool> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|e| e.id == id) {
            Some(row) => {
                *row = Employee::from_fields(id, fields.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> anyhow::Result<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
