//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and
//! infrastructure. Store handles are constructed once at startup and
//! injected here; nothing reaches for ambient/global connections.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, EmployeeService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Employee service
    pub employee_service: Arc<dyn EmployeeService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service management.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            auth_service: container.auth(),
            employee_service: container.employees(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
            database,
        }
    }
}
