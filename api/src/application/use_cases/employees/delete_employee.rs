use mongodb::bson::oid::ObjectId;

use crate::application::ports::employee_repository::EmployeeRepository;

pub struct DeleteEmployee<'a, R: EmployeeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EmployeeRepository + ?Sized> DeleteEmployee<'a, R> {
    pub async fn execute(&self, id: ObjectId) -> anyhow::Result<bool> {
        let deleted = self.repo.delete(id).await?;
        Ok(deleted > 0)
    }
}
