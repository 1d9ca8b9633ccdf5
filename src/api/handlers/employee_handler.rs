//! Employee record handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{EmployeeResponse, NewEmployee, UpdateEmployee};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Employee creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "first_name is required"))]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "gender is required"))]
    #[schema(example = "Female")]
    pub gender: String,
    #[validate(length(min = 1, message = "designation is required"))]
    #[schema(example = "Engineer")]
    pub designation: String,
    #[validate(range(min = 0.0, message = "salary must be a non-negative number"))]
    #[schema(example = 90000.0)]
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    #[validate(length(min = 1, message = "department is required"))]
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "https://cdn.example.com/photos/ada.png")]
    pub employee_photo: Option<String>,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        NewEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            gender: req.gender,
            designation: req.designation,
            salary: req.salary,
            date_of_joining: req.date_of_joining,
            department: req.department,
            employee_photo: req.employee_photo,
        }
    }
}

/// Employee partial-update request.
///
/// No field-level validation on purpose: a supplied-but-falsy value is a
/// no-op for that field, not an error.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEmployeeRequest {
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

impl From<UpdateEmployeeRequest> for UpdateEmployee {
    fn from(req: UpdateEmployeeRequest) -> Self {
        UpdateEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            gender: req.gender,
            designation: req.designation,
            salary: req.salary,
            date_of_joining: req.date_of_joining,
            department: req.department,
            employee_photo: req.employee_photo,
        }
    }
}

/// Search filters; both optional, combined with logical AND
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeSearchQuery {
    /// Exact-match designation filter
    pub designation: Option<String>,
    /// Exact-match department filter
    pub department: Option<String>,
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_employees).post(add_employee))
        .route("/search", get(search_employees))
        .route(
            "/:id",
            get(get_employee_by_id)
                .put(update_employee)
                .delete(delete_employee),
        )
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "List of all employees", body = Vec<EmployeeResponse>)
    )
)]
pub async fn get_all_employees(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee record", body = EmployeeResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// Search employees by designation and/or department
#[utoipa::path(
    get,
    path = "/employees/search",
    tag = "Employees",
    params(EmployeeSearchQuery),
    responses(
        (status = 200, description = "Matching employees", body = Vec<EmployeeResponse>)
    )
)]
pub async fn search_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeSearchQuery>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state
        .employee_service
        .search_employees(query.designation, query.department)
        .await?;

    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created successfully", body = EmployeeResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn add_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<Created<EmployeeResponse>> {
    let employee = state.employee_service.add_employee(payload.into()).await?;
    Ok(Created(EmployeeResponse::from(employee)))
}

/// Update an employee record
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated successfully", body = EmployeeResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .update_employee(id, payload.into())
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// Delete an employee record
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "Employees",
    params(
        ("id" = Uuid, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted successfully", body = MessageResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.employee_service.delete_employee(id).await?;

    Ok(Json(MessageResponse::new(format!(
        "Employee with ID {} deleted successfully!",
        id
    ))))
}
