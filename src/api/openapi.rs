//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, employee_handler};
use crate::domain::EmployeeResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Employee Management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Management API",
        version = "0.1.0",
        description = "Employee management backend with authentication, built on Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::signup,
        auth_handler::login,
        // Employee endpoints
        employee_handler::get_all_employees,
        employee_handler::get_employee_by_id,
        employee_handler::search_employees,
        employee_handler::add_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
    ),
    components(
        schemas(
            EmployeeResponse,
            MessageResponse,
            auth_handler::SignupRequest,
            auth_handler::LoginRequest,
            employee_handler::CreateEmployeeRequest,
            employee_handler::UpdateEmployeeRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "Account signup and login"),
        (name = "Employees", description = "Employee record operations")
    )
)]
pub struct ApiDoc;
