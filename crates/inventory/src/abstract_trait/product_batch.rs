use crate::{errors::ProductBatchError, model::ProductBatch};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductBatchRepository = Arc<dyn ProductBatchRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductBatchRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductBatch>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductBatch>, RepositoryError>;
    async fn batch_number_taken(
        &self,
        value: i32,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &ProductBatch) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &ProductBatch) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}

pub type DynProductBatchService = Arc<dyn ProductBatchServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductBatchServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductBatch>, ProductBatchError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductBatch, ProductBatchError>;
    async fn save(&self, value: &ProductBatch) -> Result<i32, ProductBatchError>;
    async fn update(&self, value: &ProductBatch) -> Result<(), ProductBatchError>;
    async fn delete(&self, id: i32) -> Result<(), ProductBatchError>;
}
