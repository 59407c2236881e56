use crate::{
    abstract_trait::purchase_order::DynPurchaseOrderService,
    domain::{
        requests::{PURCHASE_ORDER_FIELDS, PurchaseOrderRequest},
        response::api::ApiResponse,
    },
    errors::PurchaseOrderError,
    handler::common::{body_rejection, invalid_field, path_id},
    model::PurchaseOrder,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    errors::{Envelope, ErrorResponse, HttpError},
    utils::{decode_required, first_violation, merge},
};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const ENVELOPE: Envelope = Envelope::Error;
const INVALID: StatusCode = StatusCode::BAD_REQUEST;

fn map_error(err: PurchaseOrderError) -> HttpError {
    match &err {
        PurchaseOrderError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        PurchaseOrderError::OrderNumberAlreadyExists
        | PurchaseOrderError::BuyerNotFound
        | PurchaseOrderError::ProductRecordNotFound
        | PurchaseOrderError::OrderStatusNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        PurchaseOrderError::Repo(source) => {
            error!("❌ purchase order request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/purchaseOrders",
    tag = "PurchaseOrder",
    responses(
        (status = 200, description = "List of purchase orders", body = ApiResponse<Vec<PurchaseOrder>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_purchase_orders(
    Extension(service): Extension<DynPurchaseOrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let purchase_orders = service.find_all().await.map_err(|err| {
        error!("❌ listing purchase orders failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(purchase_orders))))
}

#[utoipa::path(
    get,
    path = "/api/v1/purchaseOrders/{id}",
    tag = "PurchaseOrder",
    params(("id" = i32, Path, description = "Purchase order ID")),
    responses(
        (status = 200, description = "Purchase order details", body = ApiResponse<PurchaseOrder>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Purchase order not found", body = ErrorResponse)
    )
)]
pub async fn get_purchase_order(
    Extension(service): Extension<DynPurchaseOrderService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let purchase_order = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(purchase_order))))
}

#[utoipa::path(
    post,
    path = "/api/v1/purchaseOrders",
    tag = "PurchaseOrder",
    request_body = PurchaseOrderRequest,
    responses(
        (status = 201, description = "Purchase order created", body = ApiResponse<PurchaseOrder>),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Conflicting or unknown reference", body = ErrorResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse)
    )
)]
pub async fn create_purchase_order(
    Extension(service): Extension<DynPurchaseOrderService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: PurchaseOrderRequest =
        decode_required(&body, PURCHASE_ORDER_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, PURCHASE_ORDER_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut purchase_order = request.into_model(0).map_err(invalid_field(ENVELOPE, INVALID))?;
    purchase_order.id = service.save(&purchase_order).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(purchase_order))))
}

#[utoipa::path(
    put,
    path = "/api/v1/purchaseOrders/{id}",
    tag = "PurchaseOrder",
    params(("id" = i32, Path, description = "Purchase order ID")),
    request_body = PurchaseOrderRequest,
    responses(
        (status = 200, description = "Purchase order updated", body = ApiResponse<PurchaseOrder>),
        (status = 404, description = "Purchase order not found", body = ErrorResponse),
        (status = 409, description = "Conflicting or unknown reference", body = ErrorResponse),
        (status = 400, description = "Invalid field", body = ErrorResponse)
    )
)]
pub async fn update_purchase_order(
    Extension(service): Extension<DynPurchaseOrderService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: PurchaseOrderRequest = merge(&PurchaseOrderRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, PURCHASE_ORDER_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let purchase_order = request.into_model(id).map_err(invalid_field(ENVELOPE, INVALID))?;
    service.update(&purchase_order).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(purchase_order))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/purchaseOrders/{id}",
    tag = "PurchaseOrder",
    params(("id" = i32, Path, description = "Purchase order ID")),
    responses(
        (status = 204, description = "Purchase order deleted"),
        (status = 404, description = "Purchase order not found", body = ErrorResponse)
    )
)]
pub async fn delete_purchase_order(
    Extension(service): Extension<DynPurchaseOrderService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn purchase_order_routes(service: DynPurchaseOrderService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/purchaseOrders", get(get_purchase_orders).post(create_purchase_order))
        .route(
            "/api/v1/purchaseOrders/{id}",
            get(get_purchase_order).put(update_purchase_order).delete(delete_purchase_order),
        )
        .layer(Extension(service))
}
