use crate::{errors::ProductRecordError, model::ProductRecord};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductRecordRepository = Arc<dyn ProductRecordRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRecordRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductRecord>, RepositoryError>;
    async fn create(&self, value: &ProductRecord) -> Result<i32, RepositoryError>;
}

pub type DynProductRecordService = Arc<dyn ProductRecordServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductRecordServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, ProductRecordError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductRecord, ProductRecordError>;
    async fn save(&self, value: &ProductRecord) -> Result<i32, ProductRecordError>;
}
