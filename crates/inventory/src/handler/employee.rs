use crate::{
    abstract_trait::employee::DynEmployeeService,
    domain::{
        requests::{EMPLOYEE_FIELDS, EmployeeRequest, ReportQuery},
        response::{api::ApiResponse, report::EmployeeInboundOrdersReport},
    },
    errors::EmployeeError,
    handler::common::{body_rejection, invalid_field, path_id, report_filter},
    model::Employee,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    errors::{Envelope, HttpError, MessageResponse},
    utils::{decode_required, first_violation, merge},
};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const ENVELOPE: Envelope = Envelope::Message;
const INVALID: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

fn map_error(err: EmployeeError) -> HttpError {
    match &err {
        EmployeeError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        EmployeeError::CardNumberAlreadyExists
        | EmployeeError::WarehouseNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        EmployeeError::Repo(source) => {
            error!("❌ employee request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "Employee",
    responses(
        (status = 200, description = "List of employees", body = ApiResponse<Vec<Employee>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_employees(
    Extension(service): Extension<DynEmployeeService>,
) -> Result<impl IntoResponse, HttpError> {
    let employees = service.find_all().await.map_err(|err| {
        error!("❌ listing employees failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(employees))))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tag = "Employee",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = ApiResponse<Employee>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Employee not found", body = MessageResponse)
    )
)]
pub async fn get_employee(
    Extension(service): Extension<DynEmployeeService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let employee = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(employee))))
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    tag = "Employee",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = ApiResponse<Employee>),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Missing or invalid field", body = MessageResponse)
    )
)]
pub async fn create_employee(
    Extension(service): Extension<DynEmployeeService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: EmployeeRequest =
        decode_required(&body, EMPLOYEE_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, EMPLOYEE_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut employee = request.into_model(0);
    employee.id = service.save(&employee).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(employee))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/employees/{id}",
    tag = "Employee",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = ApiResponse<Employee>),
        (status = 404, description = "Employee not found", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Invalid field", body = MessageResponse)
    )
)]
pub async fn update_employee(
    Extension(service): Extension<DynEmployeeService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: EmployeeRequest = merge(&EmployeeRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, EMPLOYEE_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let employee = request.into_model(id);
    service.update(&employee).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(employee))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    tag = "Employee",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = MessageResponse)
    )
)]
pub async fn delete_employee(
    Extension(service): Extension<DynEmployeeService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/reportInboundOrders",
    tag = "Employee",
    params(ReportQuery),
    responses(
        (status = 200, description = "Inbound orders per employee", body = ApiResponse<Vec<EmployeeInboundOrdersReport>>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Employee not found", body = MessageResponse)
    )
)]
pub async fn report_inbound_orders(
    Extension(service): Extension<DynEmployeeService>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = report_filter(query, ENVELOPE)?;
    let report = service.report_inbound_orders(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(report))))
}

pub fn employee_routes(service: DynEmployeeService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/employees", get(get_employees).post(create_employee))
        .route(
            "/api/v1/employees/reportInboundOrders",
            get(report_inbound_orders),
        )
        .route(
            "/api/v1/employees/{id}",
            get(get_employee).patch(update_employee).delete(delete_employee),
        )
        .layer(Extension(service))
}
