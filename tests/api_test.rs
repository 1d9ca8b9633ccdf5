//! Integration tests for API-facing behavior.
//!
//! These tests use mock services implementing the service traits, and
//! verify the response envelope, error translation, and serialization
//! guarantees without requiring a database connection.

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use employee_api::domain::{Account, Employee, EmployeeResponse, NewEmployee, UpdateEmployee};
use employee_api::errors::{AppError, AppResult};
use employee_api::services::{AuthService, EmployeeService};
use employee_api::types::{ApiResponse, MessageResponse};

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock auth service that returns predefined responses
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(
        &self,
        username: String,
        email: String,
        _password: String,
    ) -> AppResult<Account> {
        Ok(Account::new(
            Uuid::new_v4(),
            username,
            email,
            "hashed".to_string(),
        ))
    }

    async fn login(&self, username: String, _password: String) -> AppResult<Account> {
        if username == "alice" {
            Ok(Account::new(
                Uuid::new_v4(),
                username,
                "alice@example.com".to_string(),
                "hashed".to_string(),
            ))
        } else {
            Err(AppError::AccountNotFound)
        }
    }
}

fn test_employee(id: Uuid) -> Employee {
    Employee {
        id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        gender: "Female".to_string(),
        designation: "Engineer".to_string(),
        salary: 90000.0,
        date_of_joining: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        department: "Engineering".to_string(),
        employee_photo: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Mock employee service for testing
struct MockEmployeeService;

#[async_trait]
impl EmployeeService for MockEmployeeService {
    async fn add_employee(&self, fields: NewEmployee) -> AppResult<Employee> {
        let mut employee = test_employee(Uuid::new_v4());
        employee.first_name = fields.first_name;
        employee.last_name = fields.last_name;
        Ok(employee)
    }

    async fn get_employee(&self, id: Uuid) -> AppResult<Employee> {
        Ok(test_employee(id))
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(vec![
            test_employee(Uuid::new_v4()),
            test_employee(Uuid::new_v4()),
        ])
    }

    async fn search_employees(
        &self,
        _designation: Option<String>,
        _department: Option<String>,
    ) -> AppResult<Vec<Employee>> {
        Ok(vec![test_employee(Uuid::new_v4())])
    }

    async fn update_employee(&self, id: Uuid, changes: UpdateEmployee) -> AppResult<Employee> {
        let mut employee = test_employee(id);
        if let Some(designation) = changes.designation {
            employee.designation = designation;
        }
        Ok(employee)
    }

    async fn delete_employee(&self, _id: Uuid) -> AppResult<()> {
        Ok(())
    }
}

// =============================================================================
// Service Trait Object Tests
// =============================================================================

#[tokio::test]
async fn test_mock_services_through_trait_objects() {
    let auth: Box<dyn AuthService> = Box::new(MockAuthService);
    let employees: Box<dyn EmployeeService> = Box::new(MockEmployeeService);

    let account = auth
        .register(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "Password1!".to_string(),
        )
        .await
        .unwrap();
    assert_eq!(account.username, "alice");

    let unknown = auth
        .login("bob".to_string(), "Password1!".to_string())
        .await;
    assert!(matches!(unknown.unwrap_err(), AppError::AccountNotFound));

    let listed = employees.list_employees().await.unwrap();
    assert_eq!(listed.len(), 2);
}

// =============================================================================
// Response Envelope Tests
// =============================================================================

#[tokio::test]
async fn test_api_response_structure() {
    let response: ApiResponse<String> = ApiResponse::success("test data".to_string());
    assert!(response.success);
    assert!(response.data.is_some());
    assert_eq!(response.data.unwrap(), "test data");
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_api_response_with_message() {
    let response: ApiResponse<i32> = ApiResponse::with_message(42, "Operation completed");
    assert!(response.success);
    assert_eq!(response.data.unwrap(), 42);
    assert_eq!(response.message.unwrap(), "Operation completed");
}

#[tokio::test]
async fn test_message_only_response() {
    let response: ApiResponse<()> = ApiResponse::message("Success");
    assert!(response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message.unwrap(), "Success");
}

#[tokio::test]
async fn test_confirmation_message_formats() {
    let signup = MessageResponse::new("User created successfully!");
    assert_eq!(signup.message, "User created successfully!");

    let login = MessageResponse::new(format!("User {} logged in successfully!", "alice"));
    assert_eq!(login.message, "User alice logged in successfully!");

    let id = Uuid::nil();
    let deleted = MessageResponse::new(format!("Employee with ID {} deleted successfully!", id));
    assert!(deleted.message.starts_with("Employee with ID "));
    assert!(deleted.message.ends_with(" deleted successfully!"));
}

// =============================================================================
// Error Translation Tests
// =============================================================================

#[tokio::test]
async fn test_error_codes_match_contract() {
    assert_eq!(AppError::AccountNotFound.code(), "USER_NOT_FOUND");
    assert_eq!(AppError::InvalidCredentials.code(), "INCORRECT_PASSWORD");
    assert_eq!(AppError::DuplicateAccount.code(), "USERNAME_EXISTS");
    assert_eq!(AppError::EmployeeNotFound.code(), "EMPLOYEE_NOT_FOUND");
    assert_eq!(
        AppError::validation("x is required").code(),
        "VALIDATION_ERROR"
    );
    assert_eq!(AppError::internal("boom").code(), "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_error_status_codes() {
    assert_eq!(AppError::AccountNotFound.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        AppError::InvalidCredentials.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(AppError::DuplicateAccount.status(), StatusCode::CONFLICT);
    assert_eq!(AppError::EmployeeNotFound.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        AppError::validation("x is required").status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::internal("boom").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// Serialization Guarantees
// =============================================================================

#[tokio::test]
async fn test_account_serialization_never_exposes_hash() {
    let account = Account::new(
        Uuid::new_v4(),
        "alice".to_string(),
        "alice@example.com".to_string(),
        "$argon2id$v=19$secret".to_string(),
    );

    let value = serde_json::to_value(&account).unwrap();
    assert!(value.get("password_hash").is_none());
    assert_eq!(value.get("username").unwrap(), "alice");
}

#[tokio::test]
async fn test_employee_response_serialization() {
    let employee = test_employee(Uuid::new_v4());
    let response = EmployeeResponse::from(employee);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value.get("first_name").unwrap(), "Ada");
    assert_eq!(value.get("salary").unwrap(), 90000.0);
    assert_eq!(value.get("date_of_joining").unwrap(), "2023-01-15");
    // Absent photo is omitted, not serialized as null
    assert!(value.get("employee_photo").is_none());
}
