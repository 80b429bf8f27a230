use anyhow::Context;

use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::{Employee, EmployeeFields};

pub struct CreateEmployee<'a, R: EmployeeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EmployeeRepository + ?Sized> CreateEmployee<'a, R> {
    /// Inserts `fields` and answers with the document as the store persisted it.
    pub async fn execute(&self, fields: &EmployeeFields) -> anyhow::Result<Employee> {
        let id = self.repo.insert(fields).await?;
        // Not atomic with the insert: a concurrent delete lands here as an error.
        self.repo
            .get_by_id(id)
            .await
            .with_context(|| format!("failed to read back employee {id}"))?
            .with_context(|| format!("employee {id} not found after insert"))
    }
}
