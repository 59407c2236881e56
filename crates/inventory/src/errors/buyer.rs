use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuyerError {
    #[error("buyer not found")]
    NotFound,

    #[error("card number id already exists")]
    CardNumberAlreadyExists,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
