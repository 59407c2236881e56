use crate::{
    domain::response::report::ProductRecordsReport,
    errors::ProductError,
    model::Product,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn product_code_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &Product) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &Product) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
    async fn report_records(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<ProductRecordsReport>, RepositoryError>;
}

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(&self) -> Result<Vec<Product>, ProductError>;
    async fn find_by_id(&self, id: i32) -> Result<Product, ProductError>;
    async fn save(&self, value: &Product) -> Result<i32, ProductError>;
    async fn update(&self, value: &Product) -> Result<(), ProductError>;
    async fn delete(&self, id: i32) -> Result<(), ProductError>;
    async fn report_records(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<ProductRecordsReport>, ProductError>;
}
