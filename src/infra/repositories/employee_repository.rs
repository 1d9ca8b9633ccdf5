//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, NewEmployee, UpdateEmployee};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;

    /// List all employees in store order
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// List employees matching the supplied exact-match filters (logical AND)
    async fn find_by_filter(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>>;

    /// Create a new employee record
    async fn create(&self, fields: NewEmployee) -> AppResult<Employee>;

    /// Apply the supplied fields to an existing record in a single write
    async fn update(&self, id: Uuid, changes: UpdateEmployee) -> AppResult<Employee>;

    /// Permanently delete an employee record
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn find_by_filter(
        &self,
        designation: Option<String>,
        department: Option<String>,
    ) -> AppResult<Vec<Employee>> {
        let mut query = EmployeeEntity::find();

        if let Some(designation) = designation {
            query = query.filter(employee::Column::Designation.eq(designation));
        }
        if let Some(department) = department {
            query = query.filter(employee::Column::Department.eq(department));
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn create(&self, fields: NewEmployee) -> AppResult<Employee> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            email: Set(fields.email),
            gender: Set(fields.gender),
            designation: Set(fields.designation),
            salary: Set(fields.salary),
            date_of_joining: Set(fields.date_of_joining),
            department: Set(fields.department),
            employee_photo: Set(fields.employee_photo),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn update(&self, id: Uuid, changes: UpdateEmployee) -> AppResult<Employee> {
        let employee = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::EmployeeNotFound)?;

        let mut active: ActiveModel = employee.into();

        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(gender) = changes.gender {
            active.gender = Set(gender);
        }
        if let Some(designation) = changes.designation {
            active.designation = Set(designation);
        }
        if let Some(salary) = changes.salary {
            active.salary = Set(salary);
        }
        if let Some(date_of_joining) = changes.date_of_joining {
            active.date_of_joining = Set(date_of_joining);
        }
        if let Some(department) = changes.department {
            active.department = Set(department);
        }
        if let Some(employee_photo) = changes.employee_photo {
            active.employee_photo = Set(Some(employee_photo));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::EmployeeNotFound);
        }

        Ok(())
    }
}
