use crate::{
    abstract_trait::product_batch::DynProductBatchService,
    domain::{
        requests::{PRODUCT_BATCH_FIELDS, ProductBatchRequest},
        response::api::ApiResponse,
    },
    errors::ProductBatchError,
    handler::common::{body_rejection, invalid_field, path_id},
    model::ProductBatch,
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
const INVALID: StatusCode = StatusCode::BAD_REQUEST;

fn map_error(err: ProductBatchError) -> HttpError {
    match &err {
        ProductBatchError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        ProductBatchError::BatchNumberAlreadyExists
        | ProductBatchError::ProductNotFound
        | ProductBatchError::SectionNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        ProductBatchError::Repo(source) => {
            error!("❌ product batch request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/productBatches",
    tag = "ProductBatch",
    responses(
        (status = 200, description = "List of product batches", body = ApiResponse<Vec<ProductBatch>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_product_batches(
    Extension(service): Extension<DynProductBatchService>,
) -> Result<impl IntoResponse, HttpError> {
    let product_batches = service.find_all().await.map_err(|err| {
        error!("❌ listing product batches failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product_batches))))
}

#[utoipa::path(
    get,
    path = "/api/v1/productBatches/{id}",
    tag = "ProductBatch",
    params(("id" = i32, Path, description = "Product batch ID")),
    responses(
        (status = 200, description = "Product batch details", body = ApiResponse<ProductBatch>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Product batch not found", body = MessageResponse)
    )
)]
pub async fn get_product_batch(
    Extension(service): Extension<DynProductBatchService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let product_batch = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product_batch))))
}

#[utoipa::path(
    post,
    path = "/api/v1/productBatches",
    tag = "ProductBatch",
    request_body = ProductBatchRequest,
    responses(
        (status = 201, description = "Product batch created", body = ApiResponse<ProductBatch>),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 400, description = "Missing or invalid field", body = MessageResponse)
    )
)]
pub async fn create_product_batch(
    Extension(service): Extension<DynProductBatchService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: ProductBatchRequest =
        decode_required(&body, PRODUCT_BATCH_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, PRODUCT_BATCH_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut product_batch = request.into_model(0).map_err(invalid_field(ENVELOPE, INVALID))?;
    product_batch.id = service.save(&product_batch).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(product_batch))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/productBatches/{id}",
    tag = "ProductBatch",
    params(("id" = i32, Path, description = "Product batch ID")),
    request_body = ProductBatchRequest,
    responses(
        (status = 200, description = "Product batch updated", body = ApiResponse<ProductBatch>),
        (status = 404, description = "Product batch not found", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 400, description = "Invalid field", body = MessageResponse)
    )
)]
pub async fn update_product_batch(
    Extension(service): Extension<DynProductBatchService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: ProductBatchRequest = merge(&ProductBatchRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, PRODUCT_BATCH_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let product_batch = request.into_model(id).map_err(invalid_field(ENVELOPE, INVALID))?;
    service.update(&product_batch).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product_batch))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/productBatches/{id}",
    tag = "ProductBatch",
    params(("id" = i32, Path, description = "Product batch ID")),
    responses(
        (status = 204, description = "Product batch deleted"),
        (status = 404, description = "Product batch not found", body = MessageResponse)
    )
)]
pub async fn delete_product_batch(
    Extension(service): Extension<DynProductBatchService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn product_batch_routes(service: DynProductBatchService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/productBatches", get(get_product_batches).post(create_product_batch))
        .route(
            "/api/v1/productBatches/{id}",
            get(get_product_batch).patch(update_product_batch).delete(delete_product_batch),
        )
        .layer(Extension(service))
}
