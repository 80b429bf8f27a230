use anyhow::Context;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::{Employee, EmployeeFields};
use crate::infrastructure::db::EMPLOYEES_COLLECTION;

/// Stored shape of an employee. Missing fields decode as zero values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: f64,
}

impl EmployeeDocument {
    fn into_domain(self) -> anyhow::Result<Employee> {
        let id = self.id.context("employee document without _id")?;
        Ok(Employee {
            id,
            name: self.name,
            salary: self.salary,
            age: self.age,
        })
    }
}

impl From<&EmployeeFields> for EmployeeDocument {
    fn from(f: &EmployeeFields) -> Self {
        Self {
            id: None,
            name: f.name.clone(),
            salary: f.salary,
            age: f.age,
        }
    }
}

pub struct MongoEmployeeRepository {
    pub db: Database,
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<EmployeeDocument>(EMPLOYEES_COLLECTION);
        Self { db, collection }
    }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    async fn list(&self) -> anyhow::Result<Vec<Employee>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<EmployeeDocument> = cursor.try_collect().await?;
        docs.into_iter().map(EmployeeDocument::into_domain).collect()
    }

    async fn insert(&self, fields: &EmployeeFields) -> anyhow::Result<ObjectId> {
        let res = self
            .collection
            .insert_one(EmployeeDocument::from(fields))
            .await?;
        res.inserted_id
            .as_object_id()
            .with_context(|| format!("store generated a non-ObjectId _id: {}", res.inserted_id))
    }

    async fn get_by_id(&self, id: ObjectId) -> anyhow::Result<Option<Employee>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(EmployeeDocument::into_domain)
            .transpose()
    }

    async fn replace_fields(&self, id: ObjectId, fields: &EmployeeFields) -> anyhow::Result<bool> {
        let update = doc! {
            "$set": {
                "name": fields.name.as_str(),
                "salary": fields.salary,
                "age": fields.age,
            }
        };
        let res = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;
        Ok(res.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> anyhow::Result<u64> {
        let res = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(res.deleted_count)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn new_documents_let_the_store_pick_the_id() {
        let fields = EmployeeFields {
            name: "Barbara".into(),
            salary: 3100.0,
            age: 29.0,
        };
        let raw = bson::to_document(&EmployeeDocument::from(&fields)).unwrap();
        assert!(!raw.contains_key("_id"));
        assert_eq!(raw.get_str("name").unwrap(), "Barbara");
        assert_eq!(raw.get_f64("salary").unwrap(), 3100.0);
        assert_eq!(raw.get_f64("age").unwrap(), 29.0);
    }

    #[test]
    fn sparse_documents_decode_with_zero_values() {
        let id = ObjectId::new();
        let decoded: EmployeeDocument = bson::from_document(doc! { "_id": id, "age": 40 }).unwrap();
        let employee = decoded.into_domain().unwrap();
        assert_eq!(employee.id, id);
        assert_eq!(employee.name, "");
        assert_eq!(employee.salary, 0.0);
        assert_eq!(employee.age, 40.0);
    }
}
