use crate::{
    domain::response::report::LocalitySellersReport,
    errors::LocalityError,
    model::Locality,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynLocalityRepository = Arc<dyn LocalityRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait LocalityRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Locality>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Locality>, RepositoryError>;
    /// Whether another row (any id but `exclude_id`) already uses the value.
    async fn postal_code_taken(
        &self,
        value: i32,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &Locality) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &Locality) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
    async fn report_sellers(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<LocalitySellersReport>, RepositoryError>;
}

pub type DynLocalityService = Arc<dyn LocalityServiceTrait + Send + Sync>;

#[async_trait]
pub trait LocalityServiceTrait {
    async fn find_all(&self) -> Result<Vec<Locality>, LocalityError>;
    async fn find_by_id(&self, id: i32) -> Result<Locality, LocalityError>;
    async fn save(&self, value: &Locality) -> Result<i32, LocalityError>;
    async fn update(&self, value: &Locality) -> Result<(), LocalityError>;
    async fn delete(&self, id: i32) -> Result<(), LocalityError>;
    async fn report_sellers(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<LocalitySellersReport>, LocalityError>;
}
