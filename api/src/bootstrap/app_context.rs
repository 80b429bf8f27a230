use std::sync::Arc;

use crate::application::ports::employee_repository::EmployeeRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl AppServices {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn employee_repo(&self) -> Arc<dyn EmployeeRepository> {
        self.services.employee_repo.clone()
    }
}
