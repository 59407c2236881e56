use crate::{
    abstract_trait::buyer::DynBuyerService,
    domain::{
        requests::{BUYER_FIELDS, BuyerRequest, ReportQuery},
        response::{api::ApiResponse, report::BuyerPurchaseOrdersReport},
    },
    errors::BuyerError,
    handler::common::{body_rejection, invalid_field, path_id, report_filter},
    model::Buyer,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path, Query, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use shared::{
    errors::{Envelope, ErrorResponse, HttpError},
    utils::{decode_required, first_violation, merge},
};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const ENVELOPE: Envelope = Envelope::Error;
const INVALID: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

fn map_error(err: BuyerError) -> HttpError {
    match &err {
        BuyerError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        BuyerError::CardNumberAlreadyExists => HttpError::conflict(ENVELOPE, err.to_string()),
        BuyerError::Repo(source) => {
            error!("❌ buyer request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/buyers",
    tag = "Buyer",
    responses(
        (status = 200, description = "List of buyers", body = ApiResponse<Vec<Buyer>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_buyers(
    Extension(service): Extension<DynBuyerService>,
) -> Result<impl IntoResponse, HttpError> {
    let buyers = service.find_all().await.map_err(|err| {
        error!("❌ listing buyers failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(buyers))))
}

#[utoipa::path(
    get,
    path = "/api/v1/buyers/{id}",
    tag = "Buyer",
    params(("id" = i32, Path, description = "Buyer ID")),
    responses(
        (status = 200, description = "Buyer details", body = ApiResponse<Buyer>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Buyer not found", body = ErrorResponse)
    )
)]
pub async fn get_buyer(
    Extension(service): Extension<DynBuyerService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let buyer = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(buyer))))
}

#[utoipa::path(
    post,
    path = "/api/v1/buyers",
    tag = "Buyer",
    request_body = BuyerRequest,
    responses(
        (status = 201, description = "Buyer created", body = ApiResponse<Buyer>),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Conflicting or unknown reference", body = ErrorResponse),
        (status = 422, description = "Missing or invalid field", body = ErrorResponse)
    )
)]
pub async fn create_buyer(
    Extension(service): Extension<DynBuyerService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: BuyerRequest =
        decode_required(&body, BUYER_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, BUYER_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut buyer = request.into_model(0);
    buyer.id = service.save(&buyer).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(buyer))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/buyers/{id}",
    tag = "Buyer",
    params(("id" = i32, Path, description = "Buyer ID")),
    request_body = BuyerRequest,
    responses(
        (status = 200, description = "Buyer updated", body = ApiResponse<Buyer>),
        (status = 404, description = "Buyer not found", body = ErrorResponse),
        (status = 409, description = "Conflicting or unknown reference", body = ErrorResponse),
        (status = 422, description = "Invalid field", body = ErrorResponse)
    )
)]
pub async fn update_buyer(
    Extension(service): Extension<DynBuyerService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: BuyerRequest = merge(&BuyerRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, BUYER_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let buyer = request.into_model(id);
    service.update(&buyer).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(buyer))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/buyers/{id}",
    tag = "Buyer",
    params(("id" = i32, Path, description = "Buyer ID")),
    responses(
        (status = 204, description = "Buyer deleted"),
        (status = 404, description = "Buyer not found", body = ErrorResponse)
    )
)]
pub async fn delete_buyer(
    Extension(service): Extension<DynBuyerService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/buyers/reportPurchaseOrders",
    tag = "Buyer",
    params(ReportQuery),
    responses(
        (status = 200, description = "Purchase orders per buyer", body = ApiResponse<Vec<BuyerPurchaseOrdersReport>>),
        (status = 204, description = "Nothing to report"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Buyer not found", body = ErrorResponse)
    )
)]
pub async fn report_purchase_orders(
    Extension(service): Extension<DynBuyerService>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Response, HttpError> {
    let id = report_filter(query, ENVELOPE)?;
    let report = service.report_purchase_orders(id).await.map_err(map_error)?;

    if report.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok((StatusCode::OK, Json(ApiResponse::new(report))).into_response())
}

pub fn buyer_routes(service: DynBuyerService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/buyers", get(get_buyers).post(create_buyer))
        .route(
            "/api/v1/buyers/reportPurchaseOrders",
            get(report_purchase_orders),
        )
        .route(
            "/api/v1/buyers/{id}",
            get(get_buyer).patch(update_buyer).delete(delete_buyer),
        )
        .layer(Extension(service))
}
