use mongodb::bson::oid::ObjectId;

use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::{Employee, EmployeeFields};

pub struct UpdateEmployee<'a, R: EmployeeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EmployeeRepository + ?Sized> UpdateEmployee<'a, R> {
    // Full replace of name/salary/age. None when `id` matched nothing.
    // The result echoes the submitted values; the store is not re-read.
    pub async fn execute(
        &self,
        id: ObjectId,
        fields: EmployeeFields,
    ) -> anyhow::Result<Option<Employee>> {
        if self.repo.replace_fields(id, &fields).await? {
            Ok(Some(Employee::from_fields(id, fields)))
        } else {
            Ok(None)
        }
    }
}
