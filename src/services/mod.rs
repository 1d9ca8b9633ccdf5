//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and are stateless aside from their injected
//! store.

mod auth_service;
pub mod container;
mod employee_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use employee_service::{EmployeeManager, EmployeeService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
