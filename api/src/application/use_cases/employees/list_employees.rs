use crate::application::ports::employee_repository::EmployeeRepository;
use crate::domain::employees::employee::Employee;

pub struct ListEmployees<'a, R: EmployeeRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EmployeeRepository + ?Sized> ListEmployees<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Employee>> {
        self.repo.list().await
    }
}
