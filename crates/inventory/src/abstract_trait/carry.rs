use crate::{
    domain::response::report::LocalityCarriesReport,
    errors::CarryError,
    model::Carry,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCarryRepository = Arc<dyn CarryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CarryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Carry>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Carry>, RepositoryError>;
    /// Whether another row (any id but `exclude_id`) already uses the value.
    async fn cid_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &Carry) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &Carry) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
    async fn report_by_locality(
        &self,
        locality_id: Option<i32>,
    ) -> Result<Vec<LocalityCarriesReport>, RepositoryError>;
}

pub type DynCarryService = Arc<dyn CarryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CarryServiceTrait {
    async fn find_all(&self) -> Result<Vec<Carry>, CarryError>;
    async fn find_by_id(&self, id: i32) -> Result<Carry, CarryError>;
    async fn save(&self, value: &Carry) -> Result<i32, CarryError>;
    async fn update(&self, value: &Carry) -> Result<(), CarryError>;
    async fn delete(&self, id: i32) -> Result<(), CarryError>;
    async fn report_by_locality(
        &self,
        locality_id: Option<i32>,
    ) -> Result<Vec<LocalityCarriesReport>, CarryError>;
}
