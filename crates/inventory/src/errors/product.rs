use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product not found")]
    NotFound,

    #[error("product code already exists")]
    CodeAlreadyExists,

    #[error("seller not found")]
    SellerNotFound,

    #[error("product type not found")]
    ProductTypeNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
