use crate::domain::requests::ReportQuery;
use axum::{
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
};
use shared::{
    errors::{Envelope, HttpError},
    utils::{BodyError, parse_id},
};

pub const INVALID_ID: &str = "invalid id";

/// Path ids arrive as raw strings so a bad value maps to the entity's own
/// error body instead of axum's plain-text rejection.
pub fn path_id(raw: &str, envelope: Envelope) -> Result<i32, HttpError> {
    parse_id(raw).ok_or_else(|| HttpError::bad_request(envelope, INVALID_ID))
}

/// A query string serde cannot decode (e.g. a repeated `id`) is reported the
/// same way as a non-numeric filter.
pub fn report_filter(
    query: Result<Query<ReportQuery>, QueryRejection>,
    envelope: Envelope,
) -> Result<Option<i32>, HttpError> {
    let invalid = || HttpError::bad_request(envelope, INVALID_ID);
    let Query(query) = query.map_err(|_| invalid())?;
    query.parse().map_err(|_| invalid())
}

pub fn body_rejection(envelope: Envelope, invalid: StatusCode) -> impl Fn(BodyError) -> HttpError {
    move |err| err.into_http(envelope, invalid)
}

pub fn invalid_field(envelope: Envelope, invalid: StatusCode) -> impl Fn(String) -> HttpError {
    move |message| HttpError::new(invalid, envelope, message)
}
