use crate::{errors::WarehouseError, model::Warehouse};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynWarehouseRepository = Arc<dyn WarehouseRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait WarehouseRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Warehouse>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Warehouse>, RepositoryError>;
    async fn code_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &Warehouse) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &Warehouse) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

pub type DynWarehouseService = Arc<dyn WarehouseServiceTrait + Send + Sync>;

#[async_trait]
pub trait WarehouseServiceTrait {
    async fn find_all(&self) -> Result<Vec<Warehouse>, WarehouseError>;
    async fn find_by_id(&self, id: i32) -> Result<Warehouse, WarehouseError>;
    async fn save(&self, value: &Warehouse) -> Result<i32, WarehouseError>;
    async fn update(&self, value: &Warehouse) -> Result<(), WarehouseError>;
    async fn delete(&self, id: i32) -> Result<(), WarehouseError>;
}
