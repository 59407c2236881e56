use crate::errors::error::{CodedErrorResponse, ErrorResponse, MessageResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INTERNAL_MESSAGE: &str = "internal server error";

/// Shape of the JSON body written for a failed request. Each entity keeps
/// the body its clients already parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{"message": "..."}`
    Message,
    /// `{"error": "..."}`
    Error,
    /// `{"code": "not_found", "message": "..."}`
    Coded,
}

#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub envelope: Envelope,
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, envelope: Envelope, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope,
            message: message.into(),
        }
    }

    pub fn bad_request(envelope: Envelope, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, envelope, message)
    }

    pub fn not_found(envelope: Envelope, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, envelope, message)
    }

    pub fn conflict(envelope: Envelope, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, envelope, message)
    }

    pub fn internal(envelope: Envelope) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, envelope, INTERNAL_MESSAGE)
    }
}

/// `Not Found` -> `not_found`.
pub fn status_code_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown")
        .to_lowercase()
        .replace(' ', "_")
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let HttpError {
            status,
            envelope,
            message,
        } = self;

        match envelope {
            Envelope::Message => (status, Json(MessageResponse { message })).into_response(),
            Envelope::Error => (status, Json(ErrorResponse { error: message })).into_response(),
            Envelope::Coded => (
                status,
                Json(CodedErrorResponse {
                    code: status_code_name(status),
                    message,
                }),
            )
                .into_response(),
        }
    }
}
