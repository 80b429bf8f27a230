pub mod employee_repository_memory;
pub mod employee_repository_mongo;
