use crate::{errors::PurchaseOrderError, model::PurchaseOrder};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynPurchaseOrderRepository = Arc<dyn PurchaseOrderRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseOrderRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<PurchaseOrder>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<PurchaseOrder>, RepositoryError>;
    async fn order_number_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &PurchaseOrder) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &PurchaseOrder) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

pub type DynPurchaseOrderService = Arc<dyn PurchaseOrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseOrderServiceTrait {
    async fn find_all(&self) -> Result<Vec<PurchaseOrder>, PurchaseOrderError>;
    async fn find_by_id(&self, id: i32) -> Result<PurchaseOrder, PurchaseOrderError>;
    async fn save(&self, value: &PurchaseOrder) -> Result<i32, PurchaseOrderError>;
    async fn update(&self, value: &PurchaseOrder) -> Result<(), PurchaseOrderError>;
    async fn delete(&self, id: i32) -> Result<(), PurchaseOrderError>;
}
