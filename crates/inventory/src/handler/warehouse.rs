use crate::{
    abstract_trait::warehouse::DynWarehouseService,
    domain::{
        requests::{WAREHOUSE_FIELDS, WarehouseRequest},
        response::api::ApiResponse,
    },
    errors::WarehouseError,
    handler::common::{body_rejection, invalid_field, path_id},
    model::Warehouse,
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
    errors::{Envelope, HttpError, MessageResponse},
    utils::{decode_required, first_violation, merge},
};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const ENVELOPE: Envelope = Envelope::Message;
const INVALID: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

fn map_error(err: WarehouseError) -> HttpError {
    match &err {
        WarehouseError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        WarehouseError::CodeAlreadyExists
        | WarehouseError::LocalityNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        WarehouseError::Repo(source) => {
            error!("❌ warehouse request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses",
    tag = "Warehouse",
    responses(
        (status = 200, description = "List of warehouses", body = ApiResponse<Vec<Warehouse>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_warehouses(
    Extension(service): Extension<DynWarehouseService>,
) -> Result<impl IntoResponse, HttpError> {
    let warehouses = service.find_all().await.map_err(|err| {
        error!("❌ listing warehouses failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(warehouses))))
}

#[utoipa::path(
    get,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouse",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse details", body = ApiResponse<Warehouse>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Warehouse not found", body = MessageResponse)
    )
)]
pub async fn get_warehouse(
    Extension(service): Extension<DynWarehouseService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let warehouse = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(warehouse))))
}

#[utoipa::path(
    post,
    path = "/api/v1/warehouses",
    tag = "Warehouse",
    request_body = WarehouseRequest,
    responses(
        (status = 201, description = "Warehouse created", body = ApiResponse<Warehouse>),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Missing or invalid field", body = MessageResponse)
    )
)]
pub async fn create_warehouse(
    Extension(service): Extension<DynWarehouseService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: WarehouseRequest =
        decode_required(&body, WAREHOUSE_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, WAREHOUSE_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut warehouse = request.into_model(0);
    warehouse.id = service.save(&warehouse).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(warehouse))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouse",
    params(("id" = i32, Path, description = "Warehouse ID")),
    request_body = WarehouseRequest,
    responses(
        (status = 200, description = "Warehouse updated", body = ApiResponse<Warehouse>),
        (status = 404, description = "Warehouse not found", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Invalid field", body = MessageResponse)
    )
)]
pub async fn update_warehouse(
    Extension(service): Extension<DynWarehouseService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: WarehouseRequest = merge(&WarehouseRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, WAREHOUSE_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let warehouse = request.into_model(id);
    service.update(&warehouse).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(warehouse))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/warehouses/{id}",
    tag = "Warehouse",
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 204, description = "Warehouse deleted"),
        (status = 404, description = "Warehouse not found", body = MessageResponse)
    )
)]
pub async fn delete_warehouse(
    Extension(service): Extension<DynWarehouseService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn warehouse_routes(service: DynWarehouseService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/warehouses", get(get_warehouses).post(create_warehouse))
        .route(
            "/api/v1/warehouses/{id}",
            get(get_warehouse).patch(update_warehouse).delete(delete_warehouse),
        )
        .layer(Extension(service))
}
