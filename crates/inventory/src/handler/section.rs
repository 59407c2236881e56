use crate::{
    abstract_trait::section::DynSectionService,
    domain::{
        requests::{ReportQuery, SECTION_FIELDS, SectionRequest},
        response::{api::ApiResponse, report::SectionProductsReport},
    },
    errors::SectionError,
    handler::common::{body_rejection, invalid_field, path_id, report_filter},
    model::Section,
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

fn map_error(err: SectionError) -> HttpError {
    match &err {
        SectionError::NotFound => HttpError::not_found(ENVELOPE, err.to_string()),
        SectionError::DuplicateNumber
        | SectionError::WarehouseNotFound
        | SectionError::ProductTypeNotFound => HttpError::conflict(ENVELOPE, err.to_string()),
        SectionError::Repo(source) => {
            error!("❌ section request failed: {source}");
            HttpError::internal(ENVELOPE)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/sections",
    tag = "Section",
    responses(
        (status = 200, description = "List of sections", body = ApiResponse<Vec<Section>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_sections(
    Extension(service): Extension<DynSectionService>,
) -> Result<impl IntoResponse, HttpError> {
    let sections = service.find_all().await.map_err(|err| {
        error!("❌ listing sections failed: {err}");
        HttpError::internal(ENVELOPE)
    })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(sections))))
}

#[utoipa::path(
    get,
    path = "/api/v1/sections/{id}",
    tag = "Section",
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 200, description = "Section details", body = ApiResponse<Section>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Section not found", body = MessageResponse)
    )
)]
pub async fn get_section(
    Extension(service): Extension<DynSectionService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let section = service.find_by_id(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(section))))
}

#[utoipa::path(
    post,
    path = "/api/v1/sections",
    tag = "Section",
    request_body = SectionRequest,
    responses(
        (status = 201, description = "Section created", body = ApiResponse<Section>),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 409, description = "Duplicate number or unknown reference", body = MessageResponse),
        (status = 422, description = "Missing or invalid field", body = MessageResponse)
    )
)]
pub async fn create_section(
    Extension(service): Extension<DynSectionService>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let request: SectionRequest =
        decode_required(&body, SECTION_FIELDS).map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, SECTION_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let mut section = request.into_model(0);
    section.id = service.save(&section).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(section))))
}

#[utoipa::path(
    patch,
    path = "/api/v1/sections/{id}",
    tag = "Section",
    params(("id" = i32, Path, description = "Section ID")),
    request_body = SectionRequest,
    responses(
        (status = 200, description = "Section updated", body = ApiResponse<Section>),
        (status = 404, description = "Section not found", body = MessageResponse),
        (status = 409, description = "Duplicate number or unknown reference", body = MessageResponse),
        (status = 422, description = "Invalid field", body = MessageResponse)
    )
)]
pub async fn update_section(
    Extension(service): Extension<DynSectionService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    let current = service.find_by_id(id).await.map_err(map_error)?;

    let request: SectionRequest = merge(&SectionRequest::from(current), &body)
        .map_err(body_rejection(ENVELOPE, INVALID))?;
    first_violation(&request, SECTION_FIELDS).map_err(invalid_field(ENVELOPE, INVALID))?;

    let section = request.into_model(id);
    service.update(&section).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(section))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sections/{id}",
    tag = "Section",
    params(("id" = i32, Path, description = "Section ID")),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 404, description = "Section not found", body = MessageResponse)
    )
)]
pub async fn delete_section(
    Extension(service): Extension<DynSectionService>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = path_id(&id, ENVELOPE)?;
    service.delete(id).await.map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/sections/reportProducts",
    tag = "Section",
    params(ReportQuery),
    responses(
        (status = 200, description = "Product quantity per section", body = ApiResponse<Vec<SectionProductsReport>>),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Section not found", body = MessageResponse)
    )
)]
pub async fn report_products(
    Extension(service): Extension<DynSectionService>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = report_filter(query, ENVELOPE)?;
    let report = service.report_products(id).await.map_err(map_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::new(report))))
}

pub fn section_routes(service: DynSectionService) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/v1/sections", get(get_sections).post(create_section))
        .route("/api/v1/sections/reportProducts", get(report_products))
        .route(
            "/api/v1/sections/{id}",
            get(get_section)
                .patch(update_section)
                .delete(delete_section),
        )
        .layer(Extension(service))
}
