use shared::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PurchaseOrderError {
    #[error("purchase order not found")]
    NotFound,

    #[error("order number already exists")]
    OrderNumberAlreadyExists,

    #[error("buyer not found")]
    BuyerNotFound,

    #[error("product record not found")]
    ProductRecordNotFound,

    #[error("order status not found")]
    OrderStatusNotFound,

    #[error(transparent)]
    Repo(#[from] RepositoryError),
}
