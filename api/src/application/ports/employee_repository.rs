use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::employees::employee::{Employee, EmployeeFields};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees in the store's natural order.
    async fn list(&self) -> anyhow::Result<Vec<Employee>>;

    /// Inserts a new document and returns the id the store generated for it.
    async fn insert(&self, fields: &EmployeeFields) -> anyhow::Result<ObjectId>;

    async fn get_by_id(&self, id: ObjectId) -> anyhow::Result<Option<Employee>>;

    // Returns false when no document matched `id`
    async fn replace_fields(&self, id: ObjectId, fields: &EmployeeFields) -> anyhow::Result<bool>;

    // Number of documents removed (0 or 1)
    async fn delete(&self, id: ObjectId) -> anyhow::Result<u64>;

    async fn ping(&self) -> anyhow::Result<()>;
}
