use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductBatchError {
    #[error("product batch not found")]
    NotFound,

    #[error("batch number already exists")]
    BatchNumberAlreadyExists,

    #[error("product not found")]
    ProductNotFound,

    #[error("section not found")]
    SectionNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
