use crate::{
    abstract_trait::product::DynProductService,
    domain::{
        requests::{PRODUCT_FIELDS, ProductRequest, ReportQuery},
        response::{api::ApiResponse, report::ProductRecordsReport},
    },
    errors::ProductError,
    handler::common::{body_rejection, invalid_field, path_id, report_filter},
    model::Product,
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

fn map_error(err: ProductError) -> HttpError {
    match &err {
        ProductError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        ProductError::CodeAlreadyExists
        | ProductError::SellerNotFound
        | ProductError::ProductTypeNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        ProductError::Repo(source) => {
            error!("❌ product request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<Product>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_all().await.map_err(|err| {
        error!("❌ listing products failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(products))))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<Product>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let product = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Missing or invalid field", body = MessageResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: ProductRequest =
        decode_required(&body, PRODUCT_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, ProductRequest::validation_order())
        .map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut product = request.into_model(0);
    product.id = service.save(&product).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 404, description = "Product not found", body = MessageResponse),
        (status = 409, description = "Conflicting or unknown reference", body = MessageResponse),
        (status = 422, description = "Invalid field", body = MessageResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: ProductRequest = merge(&ProductRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, ProductRequest::validation_order())
        .map_err(invalid_field(ENVELOPE, INVALID))?;

    let product = request.into_model(id);
    service.update(&product).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = MessageResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/reportRecords",
    tag = "Product",
    params(ReportQuery),
    responses(
        (status = 200, description = "Record count per product", body = ApiResponse<Vec<ProductRecordsReport>>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse)
    )
)]
pub async fn report_records(
    Extension(service): Extension<DynProductService>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = report_filter(query, ENVELOPE)?;
    let report = service.report_records(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(report))))
}

pub fn product_routes(service: DynProductService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/products", get(get_products).post(create_product))
        .route("/api/v1/products/reportRecords", get(report_records))
        .route(
            "/api/v1/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .layer(Extension(service))
}
