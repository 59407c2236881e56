use crate::{
    abstract_trait::seller::DynSellerService,
    domain::{
        requests::{SELLER_FIELDS, SellerRequest},
        response::api::ApiResponse,
    },
    errors::SellerError,
    handler::common::{body_rejection, invalid_field, path_id},
    model::Seller,
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
    errors::{CodedErrorResponse, Envelope, HttpError},
    utils::{decode_required, first_violation, merge},
};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

const ENVELOPE: Envelope = Envelope::Coded;
const INVALID: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

fn map_error(err: SellerError) -> HttpError {
    match &err {
        SellerError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        SellerError::CidAlreadyExists
        | SellerError::LocalityNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        SellerError::Repo(source) => {
            error!("❌ seller request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/sellers",
    tag = "Seller",
    responses(
        (status = 200, description = "List of sellers", body = ApiResponse<Vec<Seller>>),
        (status = 404, description = "No sellers found", body = CodedErrorResponse),
        (status = 500, description = "Internal server error", body = CodedErrorResponse)
    )
)]
pub async fn get_sellers(
    Extension(service): Extension<DynSellerService>,
) -> Result<impl IntoResponse, HttpError> {
    let sellers = service.find_all().await.map_err(|err| match &err {
        SellerError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        _ => {
            error!("❌ listing sellers failed: {err}");
            HttpError::internal(ENVELOPE)
        }
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(sellers))))
}

#[utoipa::path(
    get,
    path = "/api/v1/sellers/{id}",
    tag = "Seller",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller details", body = ApiResponse<Seller>),
        (status = 400, description = "Invalid id", body = CodedErrorResponse),
        (status = 404, description = "Seller not found", body = CodedErrorResponse)
    )
)]
pub async fn get_seller(
    Extension(service): Extension<DynSellerService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let seller = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(seller))))
}

#[utoipa::path(
    post,
    path = "/api/v1/sellers",
    tag = "Seller",
    request_body = SellerRequest,
    responses(
        (status = 201, description = "Seller created", body = ApiResponse<Seller>),
        (status = 400, description = "Malformed body", body = CodedErrorResponse),
        (status = 409, description = "Conflicting or unknown reference", body = CodedErrorResponse),
        (status = 422, description = "Missing or invalid field", body = CodedErrorResponse)
    )
)]
pub async fn create_seller(
    Extension(service): Extension<DynSellerService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: SellerRequest =
        decode_required(&body, SELLER_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, SELLER_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut seller = request.into_model(0);
    seller.id = service.save(&seller).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(seller))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/sellers/{id}",
    tag = "Seller",
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = SellerRequest,
    responses(
        (status = 200, description = "Seller updated", body = ApiResponse<Seller>),
        (status = 404, description = "Seller not found", body = CodedErrorResponse),
        (status = 409, description = "Conflicting or unknown reference", body = CodedErrorResponse),
        (status = 422, description = "Invalid field", body = CodedErrorResponse)
    )
)]
pub async fn update_seller(
    Extension(service): Extension<DynSellerService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: SellerRequest = merge(&SellerRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, SELLER_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let seller = request.into_model(id);
    service.update(&seller).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(seller))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sellers/{id}",
    tag = "Seller",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 204, description = "Seller deleted"),
        (status = 404, description = "Seller not found", body = CodedErrorResponse)
    )
)]
pub async fn delete_seller(
    Extension(service): Extension<DynSellerService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn seller_routes(service: DynSellerService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/sellers", get(get_sellers).post(create_seller))
        .route(
            "/api/v1/sellers/{id}",
            get(get_seller).patch(update_seller).delete(delete_seller),
        )
        .layer(Extension(service))
}
