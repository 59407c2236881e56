use crate::{
    abstract_trait::locality::DynLocalityService,
    domain::{
        requests::{LOCALITY_FIELDS, LocalityRequest, ReportQuery},
        response::{api::ApiResponse, report::LocalitySellersReport},
    },
    errors::LocalityError,
    handler::common::{body_rejection, invalid_field, path_id, report_filter},
    model::Locality,
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
    errors::{CodedErrorResponse, Envelope, HttpError},
    utils::{decode_required, first_violation, merge},
};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const ENVELOPE: Envelope = Envelope::Coded;
const INVALID: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

fn map_error(err: LocalityError) -> HttpError {
    match &err {
        LocalityError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        LocalityError::AlreadyExists => HttpError::conflict(ENVELOPE, err.to_string()),
        LocalityError::Repo(source) => {
            error!("❌ locality request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/localities",
    tag = "Locality",
    responses(
        (status = 200, description = "List of localities", body = ApiResponse<Vec<Locality>>),
        (status = 404, description = "No localities found", body = CodedErrorResponse),
        (status = 500, description = "Internal server error", body = CodedErrorResponse)
    )
)]
pub async fn get_localities(
    Extension(service): Extension<DynLocalityService>,
) -> Result<impl IntoResponse, HttpError> {
    let localities = service.find_all().await.map_err(|err| match &err {
        LocalityError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        _ => {
            error!("❌ listing localities failed: {err}");
            HttpError::internal(ENVELOPE)
        }
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(localities))))
}

#[utoipa::path(
    get,
    path = "/api/v1/localities/{id}",
    tag = "Locality",
    params(("id" = i32, Path, description = "Locality ID")),
    responses(
        (status = 200, description = "Locality details", body = ApiResponse<Locality>),
        (status = 400, description = "Invalid id", body = CodedErrorResponse),
        (status = 404, description = "Locality not found", body = CodedErrorResponse)
    )
)]
pub async fn get_locality(
    Extension(service): Extension<DynLocalityService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let locality = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(locality))))
}

#[utoipa::path(
    post,
    path = "/api/v1/localities",
    tag = "Locality",
    request_body = LocalityRequest,
    responses(
        (status = 201, description = "Locality created", body = ApiResponse<Locality>),
        (status = 400, description = "Malformed body", body = CodedErrorResponse),
        (status = 409, description = "Conflicting or unknown reference", body = CodedErrorResponse),
        (status = 422, description = "Missing or invalid field", body = CodedErrorResponse)
    )
)]
pub async fn create_locality(
    Extension(service): Extension<DynLocalityService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: LocalityRequest =
        decode_required(&body, LOCALITY_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, LOCALITY_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut locality = request.into_model(0);
    locality.id = service.save(&locality).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(locality))))
}

#[utoipa::path(
    put,
    path = "/api/v1/localities/{id}",
    tag = "Locality",
    params(("id" = i32, Path, description = "Locality ID")),
    request_body = LocalityRequest,
    responses(
        (status = 200, description = "Locality updated", body = ApiResponse<Locality>),
        (status = 404, description = "Locality not found", body = CodedErrorResponse),
        (status = 409, description = "Conflicting or unknown reference", body = CodedErrorResponse),
        (status = 422, description = "Invalid field", body = CodedErrorResponse)
    )
)]
pub async fn update_locality(
    Extension(service): Extension<DynLocalityService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: LocalityRequest = merge(&LocalityRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, LOCALITY_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let locality = request.into_model(id);
    service.update(&locality).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(locality))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/localities/{id}",
    tag = "Locality",
    params(("id" = i32, Path, description = "Locality ID")),
    responses(
        (status = 204, description = "Locality deleted"),
        (status = 404, description = "Locality not found", body = CodedErrorResponse)
    )
)]
pub async fn delete_locality(
    Extension(service): Extension<DynLocalityService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/localities/reportSellers",
    tag = "Locality",
    params(ReportQuery),
    responses(
        (status = 200, description = "Seller count per locality", body = ApiResponse<Vec<LocalitySellersReport>>),
        (status = 400, description = "Invalid id", body = CodedErrorResponse),
        (status = 404, description = "Locality not found", body = CodedErrorResponse)
    )
)]
pub async fn report_sellers(
    Extension(service): Extension<DynLocalityService>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = report_filter(query, ENVELOPE)?;
    let report = service.report_sellers(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(report))))
}

pub fn locality_routes(service: DynLocalityService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/localities", get(get_localities).post(create_locality))
        .route("/api/v1/localities/reportSellers", get(report_sellers))
        .route(
            "/api/v1/localities/{id}",
            get(get_locality).put(update_locality).delete(delete_locality),
        )
        .layer(Extension(service))
}
