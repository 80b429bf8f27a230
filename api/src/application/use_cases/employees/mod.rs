pub mod create_employee;
pub mod delete_employee;
pub mod list_employees;
pub mod update_employee;

#[cfg(test)]
pub(crate) mod test_support;
