use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductRecordError {
    #[error("product record not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
