use crate::{
    domain::response::report::BuyerPurchaseOrdersReport,
    errors::BuyerError,
    model::Buyer,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynBuyerRepository = Arc<dyn BuyerRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait BuyerRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Buyer>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Buyer>, RepositoryError>;
    async fn card_number_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &Buyer) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &Buyer) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
    async fn report_purchase_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<BuyerPurchaseOrdersReport>, RepositoryError>;
}

pub type DynBuyerService = Arc<dyn BuyerServiceTrait + Send + Sync>;

#[async_trait]
pub trait BuyerServiceTrait {
    async fn find_all(&self) -> Result<Vec<Buyer>, BuyerError>;
    async fn find_by_id(&self, id: i32) -> Result<Buyer, BuyerError>;
    async fn save(&self, value: &Buyer) -> Result<i32, BuyerError>;
    async fn update(&self, value: &Buyer) -> Result<(), BuyerError>;
    async fn delete(&self, id: i32) -> Result<(), BuyerError>;
    async fn report_purchase_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<BuyerPurchaseOrdersReport>, BuyerError>;
}
