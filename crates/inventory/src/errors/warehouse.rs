use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("warehouse not found")]
    NotFound,

    #[error("warehouse code already exists")]
    CodeAlreadyExists,

    #[error("locality not found")]
    LocalityNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
