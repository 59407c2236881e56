use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("employee not found")]
    NotFound,

    #[error("card number id already exists")]
    CardNumberAlreadyExists,

    #[error("warehouse not found")]
    WarehouseNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
