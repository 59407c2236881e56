mod error;
mod http;
mod repository;

pub use self::error::{CodedErrorResponse, ErrorResponse, MessageResponse};
pub use self::http::{Envelope, HttpError, INTERNAL_MESSAGE, status_code_name};
pub use self::repository::RepositoryError;
