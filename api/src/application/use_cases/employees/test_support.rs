use crate::domain::employees::employee::EmployeeFields;

pub(crate) fn fields(name: &str, salary: f64, age: f64) -> EmployeeFields {
    EmployeeFields {
        name: name.to_string(),
        salary,
        age,
    }
}
