//! Employee domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub department: String,
    /// Optional photo reference/URL
    pub employee_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new employee record
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub department: String,
    pub employee_photo: Option<String>,
}

/// Partial update of an employee record.
///
/// A `None` field means "not supplied". Whether a `Some` value is applied
/// is decided by [`UpdateEmployee::retain_truthy`]: a supplied value equal
/// to its falsy default (empty string, zero salary) is treated the same as
/// an omitted field and leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<NaiveDate>,
    pub department: Option<String>,
    pub employee_photo: Option<String>,
}

impl UpdateEmployee {
    /// Drop supplied-but-falsy fields.
    ///
    /// Strings count as supplied only when non-empty, salary only when
    /// non-zero. A date is applied whenever present, as the type admits
    /// no falsy value.
    pub fn retain_truthy(self) -> Self {
        Self {
            first_name: retained(self.first_name),
            last_name: retained(self.last_name),
            email: retained(self.email),
            gender: retained(self.gender),
            designation: retained(self.designation),
            salary: self.salary.filter(|salary| *salary != 0.0),
            date_of_joining: self.date_of_joining,
            department: retained(self.department),
            employee_photo: retained(self.employee_photo),
        }
    }
}

fn retained(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Employee response (client-facing shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeResponse {
    /// Unique employee identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Female")]
    pub gender: String,
    #[schema(example = "Engineer")]
    pub designation: String,
    #[schema(example = 90000.0)]
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    #[schema(example = "Engineering")]
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            gender: employee.gender,
            designation: employee.designation,
            salary: employee.salary,
            date_of_joining: employee.date_of_joining,
            department: employee.department,
            employee_photo: employee.employee_photo,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}
