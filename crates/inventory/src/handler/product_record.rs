use crate::{
    abstract_trait::product_record::DynProductRecordService,
    domain::{
        requests::{PRODUCT_RECORD_FIELDS, ProductRecordRequest},
        response::api::ApiResponse,
    },
    errors::ProductRecordError,
    handler::common::{body_rejection, invalid_field, path_id},
    model::ProductRecord,
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
    utils::{decode_required, first_violation},
};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const ENVELOPE: Envelope = Envelope::Message;
const INVALID: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

fn map_error(err: ProductRecordError) -> HttpError {
    match &err {
        ProductRecordError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        ProductRecordError::ProductNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        ProductRecordError::Repo(source) => {
            error!("❌ product record request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/productRecords",
    tag = "ProductRecord",
    responses(
        (status = 200, description = "List of product records", body = ApiResponse<Vec<ProductRecord>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_product_records(
    Extension(service): Extension<DynProductRecordService>,
) -> Result<impl IntoResponse, HttpError> {
    let product_records = service.find_all().await.map_err(|err| {
        error!("❌ listing product records failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product_records))))
}

#[utoipa::path(
    get,
    path = "/api/v1/productRecords/{id}",
    tag = "ProductRecord",
    params(("id" = i32, Path, description = "Product record ID")),
    responses(
        (status = 200, description = "Product record details", body = ApiResponse<ProductRecord>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Product record not found", body = MessageResponse)
    )
)]
pub async fn get_product_record(
    Extension(service): Extension<DynProductRecordService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let product_record = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product_record))))
}

#[utoipa::path(
    post,
    path = "/api/v1/productRecords",
    tag = "ProductRecord",
    request_body = ProductRecordRequest,
    responses(
        (status = 201, description = "Product record created", body = ApiResponse<ProductRecord>),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Missing or invalid field", body = MessageResponse)
    )
)]
pub async fn create_product_record(
    Extension(service): Extension<DynProductRecordService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: ProductRecordRequest =
        decode_required(&body, PRODUCT_RECORD_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, PRODUCT_RECORD_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut product_record = request.into_model(0).map_err(invalid_field(ENVELOPE, INVALID))?;
    product_record.id = service.save(&product_record).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(product_record))))
}

pub fn product_record_routes(service: DynProductRecordService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/productRecords", get(get_product_records).post(create_product_record))
        .route("/api/v1/productRecords/{id}", get(get_product_record))
        .layer(Extension(service))
}
