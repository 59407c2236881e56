use crate::{errors::SellerError, model::Seller};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSellerRepository = Arc<dyn SellerRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SellerRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Seller>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Seller>, RepositoryError>;
    async fn cid_taken(
        &self,
        value: i32,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &Seller) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &Seller) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

pub type DynSellerService = Arc<dyn SellerServiceTrait + Send + Sync>;

#[async_trait]
pub trait SellerServiceTrait {
    async fn find_all(&self) -> Result<Vec<Seller>, SellerError>;
    async fn find_by_id(&self, id: i32) -> Result<Seller, SellerError>;
    async fn save(&self, value: &Seller) -> Result<i32, SellerError>;
    async fn update(&self, value: &Seller) -> Result<(), SellerError>;
    async fn delete(&self, id: i32) -> Result<(), SellerError>;
}
