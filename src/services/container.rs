//! Service Container - Centralized service access.
//!
//! Features:
//! - Centralized access to all application services
//! - Thread-safe concurrent access via Arc
//! - Compatible with async/await and tokio runtime

use std::sync::Arc;

use super::{AuthService, EmployeeService};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get employee service
    fn employees(&self) -> Arc<dyn EmployeeService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    employee_service: Arc<dyn EmployeeService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{Authenticator, EmployeeManager};
        use crate::infra::{AccountStore, EmployeeStore};

        let accounts = Arc::new(AccountStore::new(db.clone()));
        let employees = Arc::new(EmployeeStore::new(db));

        let auth_service = Arc::new(Authenticator::new(accounts));
        let employee_service = Arc::new(EmployeeManager::new(employees));

        Self {
            auth_service,
            employee_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }
}
