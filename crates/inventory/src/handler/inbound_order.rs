use crate::{
    abstract_trait::inbound_order::DynInboundOrderService,
    domain::{
        requests::{INBOUND_ORDER_FIELDS, InboundOrderRequest},
        response::api::ApiResponse,
    },
    errors::InboundOrderError,
    handler::common::{body_rejection, invalid_field, path_id},
    model::InboundOrder,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use shared::{
    errors::{Envelope, HttpError, MessageResponse},
    utils::{decode_required, first_violation, merge},
};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const ENVELOPE: Envelope = Envelope::Message;
const INVALID: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

fn map_error(err: InboundOrderError) -> HttpError {
    match &err {
        InboundOrderError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        InboundOrderError::OrderNumberAlreadyExists
        | InboundOrderError::EmployeeNotFound
        | InboundOrderError::ProductBatchNotFound
        | InboundOrderError::WarehouseNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        InboundOrderError::Repo(source) => {
            error!("❌ inbound order request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/inboundOrders",
    tag = "InboundOrder",
    responses(
        (status = 200, description = "List of inbound orders", body = ApiResponse<Vec<InboundOrder>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_inbound_orders(
    Extension(service): Extension<DynInboundOrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let inbound_orders = service.find_all().await.map_err(|err| {
        error!("❌ listing inbound orders failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(inbound_orders))))
}

#[utoipa::path(
    get,
    path = "/api/v1/inboundOrders/{id}",
    tag = "InboundOrder",
    params(("id" = i32, Path, description = "Inbound order ID")),
    responses(
        (status = 200, description = "Inbound order details", body = ApiResponse<InboundOrder>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Inbound order not found", body = MessageResponse)
    )
)]
pub async fn get_inbound_order(
    Extension(service): Extension<DynInboundOrderService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let inbound_order = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(inbound_order))))
}

#[utoipa::path(
    post,
    path = "/api/v1/inboundOrders",
    tag = "InboundOrder",
    request_body = InboundOrderRequest,
    responses(
        (status = 201, description = "Inbound order created", body = ApiResponse<InboundOrder>),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Missing or invalid field", body = MessageResponse)
    )
)]
pub async fn create_inbound_order(
    Extension(service): Extension<DynInboundOrderService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: InboundOrderRequest =
        decode_required(&body, INBOUND_ORDER_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, INBOUND_ORDER_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut inbound_order = request.into_model(0, Utc::now().date_naive());
    inbound_order.id = service.save(&inbound_order).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(inbound_order))))
}

#[utoipa::path(
    put,
    path = "/api/v1/inboundOrders/{id}",
    tag = "InboundOrder",
    params(("id" = i32, Path, description = "Inbound order ID")),
    request_body = InboundOrderRequest,
    responses(
        (status = 200, description = "Inbound order updated", body = ApiResponse<InboundOrder>),
        (status = 404, description = "Inbound order not found", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Invalid field", body = MessageResponse)
    )
)]
pub async fn update_inbound_order(
    Extension(service): Extension<DynInboundOrderService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;
    let order_date = current.order_date;

    let request: InboundOrderRequest = merge(&InboundOrderRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, INBOUND_ORDER_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let inbound_order = request.into_model(id, order_date);
    service.update(&inbound_order).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(inbound_order))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/inboundOrders/{id}",
    tag = "InboundOrder",
    params(("id" = i32, Path, description = "Inbound order ID")),
    responses(
        (status = 204, description = "Inbound order deleted"),
        (status = 404, description = "Inbound order not found", body = MessageResponse)
    )
)]
pub async fn delete_inbound_order(
    Extension(service): Extension<DynInboundOrderService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn inbound_order_routes(service: DynInboundOrderService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/inboundOrders", get(get_inbound_orders).post(create_inbound_order))
        .route(
            "/api/v1/inboundOrders/{id}",
            get(get_inbound_order).put(update_inbound_order).delete(delete_inbound_order),
        )
        .layer(Extension(service))
}
