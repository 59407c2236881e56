use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InboundOrderError {
    #[error("inbound order not found")]
    NotFound,

    #[error("order number already exists")]
    OrderNumberAlreadyExists,

    #[error("employee not found")]
    EmployeeNotFound,

    #[error("product batch not found")]
    ProductBatchNotFound,

    #[error("warehouse not found")]
    WarehouseNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
