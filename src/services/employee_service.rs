//! Employee service - CRUD and filtered search over employee records.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Employee, NewEmployee, UpdateEmployee};
use crate::errors::{AppError, AppResult};
use crate::infra::EmployeeRepository;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Create a new employee record
    async fn add_employee(&self, fields: NewEmployee) -> AppResult<Employee>;

    /// Get employee by ID
    async fn get_employee(&self, id: Uuid) -> AppResult<Employee>;

    /// List all employees (unbounded snapshot, store order)
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// List employees matching designation and/or department exactly.
    /// Both filters absent returns all employees.
    async fn search_employees(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>>;

    /// Apply a partial update to an employee record
    async fn update_employee(&self, id: Uuid, changes: UpdateEmployee) -> AppResult<Employee>;

    /// Permanently delete an employee record
    async fn delete_employee(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance with its store
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

/// Required-field check at the service boundary, ahead of any store call
fn validate_new_employee(fields: &NewEmployee) -> AppResult<()> {
    let required = [
        ("first_name", &fields.first_name),
        ("last_name", &fields.last_name),
        ("email", &fields.email),
        ("gender", &fields.gender),
        ("designation", &fields.designation),
        ("department", &fields.department),
    ];

    for (name, value) in required {
        if value.is_empty() {
            return Err(AppError::validation(format!("{} is required", name)));
        }
    }

    if !fields.salary.is_finite() || fields.salary < 0.0 {
        return Err(AppError::validation("salary must be a non-negative number"));
    }

    Ok(())
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn add_employee(&self, fields: NewEmployee) -> AppResult<Employee> {
        validate_new_employee(&fields)?;
        self.repo.create(fields).await
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::EmployeeNotFound)
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.repo.list().await
    }

    async fn search_employees(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>> {
        self.repo.find_by_filter(designation, department).await
    }

    async fn update_employee(&self, id: Uuid, changes: UpdateEmployee) -> AppResult<Employee> {
        // A supplied-but-falsy value (empty string, zero salary) is
        // indistinguishable from an omitted field and leaves the stored
        // value unchanged.
        let changes = changes.retain_truthy();
        self.repo.update(id, changes).await
    }

    async fn delete_employee(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
