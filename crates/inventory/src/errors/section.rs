use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SectionError {
    #[error("section not found")]
    NotFound,

    #[error("section number already exists")]
    DuplicateNumber,

    #[error("warehouse not found")]
    WarehouseNotFound,

    #[error("product type not found")]
    ProductTypeNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
