use crate::api::handlers::{RawBody, decode_create, overlay_update, parse_id};
use crate::api::models::{
    Envelope, ErrorBody,
    employees::{EmployeeRequest, EmployeeResponse},
};
use crate::AppState;
use crate::db::models::employees::Employee;
use crate::errors::Result;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// POST /employees - Create a new employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    summary = "Create employee",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created, wrapped in the success envelope", body = EmployeeResponse),
        (status = 400, description = "Invalid body or field", body = ErrorBody),
        (status = 409, description = "Card number already used or warehouse does not exist", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_employee(State(state): State<AppState>, body: RawBody) -> Result<(StatusCode, Json<Envelope<EmployeeResponse>>)> {
    let request: EmployeeRequest = decode_create(body)?;

    let mut employee = Employee::from(request);
    state.employees.save(&mut employee).await?;

    Ok((StatusCode::CREATED, Json(Envelope::success(employee.into()))))
}

// GET /employees - List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    summary = "List employees",
    responses(
        (status = 200, description = "All employees ordered by id, wrapped in the success envelope", body = Vec<EmployeeResponse>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Envelope<Vec<EmployeeResponse>>>> {
    let employees = state.employees.get_all().await?;
    Ok(Json(Envelope::success(employees.into_iter().map(Into::into).collect())))
}

// GET /employees/{id} - Get a specific employee
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Get employee",
    responses(
        (status = 200, description = "Employee details, wrapped in the success envelope", body = EmployeeResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Employee ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_employee(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope<EmployeeResponse>>> {
    let id = parse_id(&id)?;
    let employee = state.employees.get(id).await?;
    Ok(Json(Envelope::success(employee.into())))
}

// PATCH /employees/{id} - Merge the body into an existing employee
#[utoipa::path(
    patch,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Update employee",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Updated employee, wrapped in the success envelope", body = EmployeeResponse),
        (status = 400, description = "Invalid id, body or field", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 409, description = "Card number already used or warehouse does not exist", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Employee ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: RawBody,
) -> Result<Json<Envelope<EmployeeResponse>>> {
    let id = parse_id(&id)?;
    let current = state.employees.get(id).await?;

    let request = overlay_update(EmployeeRequest::from(current), body, id)?;
    let employee = Employee::from(request);
    state.employees.update(&employee).await?;

    Ok(Json(Envelope::success(employee.into())))
}

// DELETE /employees/{id} - Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Delete employee",
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 409, description = "Employee is referenced by inbound orders", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    params(
        ("id" = i64, Path, description = "Employee ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_employee(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
