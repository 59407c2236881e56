use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SellerError {
    #[error("seller not found")]
    NotFound,

    #[error("cid already exists")]
    CidAlreadyExists,

    #[error("locality not found")]
    LocalityNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
