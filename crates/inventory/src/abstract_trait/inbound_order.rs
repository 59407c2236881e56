use crate::{errors::InboundOrderError, model::InboundOrder};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynInboundOrderRepository = Arc<dyn InboundOrderRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait InboundOrderRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<InboundOrder>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<InboundOrder>, RepositoryError>;
    async fn order_number_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &InboundOrder) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &InboundOrder) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

pub type DynInboundOrderService = Arc<dyn InboundOrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait InboundOrderServiceTrait {
    async fn find_all(&self) -> Result<Vec<InboundOrder>, InboundOrderError>;
    async fn find_by_id(&self, id: i32) -> Result<InboundOrder, InboundOrderError>;
    async fn save(&self, value: &InboundOrder) -> Result<i32, InboundOrderError>;
    async fn update(&self, value: &InboundOrder) -> Result<(), InboundOrderError>;
    async fn delete(&self, id: i32) -> Result<(), InboundOrderError>;
}
