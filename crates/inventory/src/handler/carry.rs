use crate::{
    abstract_trait::carry::DynCarryService,
    domain::{
        requests::{CARRY_FIELDS, CarryRequest, ReportQuery},
        response::{api::ApiResponse, report::LocalityCarriesReport},
    },
    errors::CarryError,
    handler::common::{body_rejection, invalid_field, path_id, report_filter},
    model::Carry,
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

fn map_error(err: CarryError) -> HttpError {
    match &err {
        CarryError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        CarryError::CidAlreadyExists
        | CarryError::LocalityNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        CarryError::Repo(source) => {
            error!("❌ carry request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/carries",
    tag = "Carry",
    responses(
        (status = 200, description = "List of carries", body = ApiResponse<Vec<Carry>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_carries(
    Extension(service): Extension<DynCarryService>,
) -> Result<impl IntoResponse, HttpError> {
    let carries = service.find_all().await.map_err(|err| {
        error!("❌ listing carries failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(carries))))
}

#[utoipa::path(
    get,
    path = "/api/v1/carries/{id}",
    tag = "Carry",
    params(("id" = i32, Path, description = "Carry ID")),
    responses(
        (status = 200, description = "Carry details", body = ApiResponse<Carry>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Carry not found", body = MessageResponse)
    )
)]
pub async fn get_carry(
    Extension(service): Extension<DynCarryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let carry = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(carry))))
}

#[utoipa::path(
    post,
    path = "/api/v1/carries",
    tag = "Carry",
    request_body = CarryRequest,
    responses(
        (status = 201, description = "Carry created", body = ApiResponse<Carry>),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Missing or invalid field", body = MessageResponse)
    )
)]
pub async fn create_carry(
    Extension(service): Extension<DynCarryService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: CarryRequest =
        decode_required(&body, CARRY_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, CARRY_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut carry = request.into_model(0).map_err(invalid_field(ENVELOPE, INVALID))?;
    carry.id = service.save(&carry).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(carry))))
}

#[utoipa::path(
    put,
    path = "/api/v1/carries/{id}",
    tag = "Carry",
    params(("id" = i32, Path, description = "Carry ID")),
    request_body = CarryRequest,
    responses(
        (status = 200, description = "Carry updated", body = ApiResponse<Carry>),
        (status = 404, description = "Carry not found", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Invalid field", body = MessageResponse)
    )
)]
pub async fn update_carry(
    Extension(service): Extension<DynCarryService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: CarryRequest = merge(&CarryRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, CARRY_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let carry = request.into_model(id).map_err(invalid_field(ENVELOPE, INVALID))?;
    service.update(&carry).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(carry))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/carries/{id}",
    tag = "Carry",
    params(("id" = i32, Path, description = "Carry ID")),
    responses(
        (status = 204, description = "Carry deleted"),
        (status = 404, description = "Carry not found", body = MessageResponse)
    )
)]
pub async fn delete_carry(
    Extension(service): Extension<DynCarryService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Carries are counted per locality, so the route lives under `/localities`
/// while answering with this handler's error body.
#[utoipa::path(
    get,
    path = "/api/v1/localities/reportCarries",
    tag = "Carry",
    params(ReportQuery),
    responses(
        (status = 200, description = "Carry count per locality", body = ApiResponse<Vec<LocalityCarriesReport>>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Locality not found", body = MessageResponse)
    )
)]
pub async fn report_carries(
    Extension(service): Extension<DynCarryService>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let locality_id = report_filter(query, ENVELOPE)?;
    let report = service
        .report_by_locality(locality_id)
        .await
        .map_err(|err| {
            if matches!(err, CarryError::LocalityNotFound) {
                HttpError::not_found(ENVELOPE, err.to_string())
            } else {
                map_error(err)
            }
        })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(report))))
}

pub fn carry_routes(service: DynCarryService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/carries", get(get_carries).post(create_carry))
        .route("/api/v1/localities/reportCarries", get(report_carries))
        .route(
            "/api/v1/carries/{id}",
            get(get_carry).put(update_carry).delete(delete_carry),
        )
        .layer(Extension(service))
}
