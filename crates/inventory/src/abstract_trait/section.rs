use crate::{
    domain::response::report::SectionProductsReport,
    errors::SectionError,
    model::Section,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSectionRepository = Arc<dyn SectionRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SectionRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Section>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Section>, RepositoryError>;
    async fn section_number_taken(
        &self,
        value: i32,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &Section) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &Section) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
    async fn report_products(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<SectionProductsReport>, RepositoryError>;
}

pub type DynSectionService = Arc<dyn SectionServiceTrait + Send + Sync>;

#[async_trait]
pub trait SectionServiceTrait {
    async fn find_all(&self) -> Result<Vec<Section>, SectionError>;
    async fn find_by_id(&self, id: i32) -> Result<Section, SectionError>;
    async fn save(&self, value: &Section) -> Result<i32, SectionError>;
    async fn update(&self, value: &Section) -> Result<(), SectionError>;
    async fn delete(&self, id: i32) -> Result<(), SectionError>;
    async fn report_products(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<SectionProductsReport>, SectionError>;
}
