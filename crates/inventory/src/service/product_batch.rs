use crate::{
    abstract_trait::{
        product_batch::{DynProductBatchRepository, ProductBatchServiceTrait},
        reference::{DynReferenceRepository, Reference},
    },
    errors::ProductBatchError,
    model::ProductBatch,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ProductBatchService {
    repository: DynProductBatchRepository,
    references: DynReferenceRepository,
}

impl ProductBatchService {
    pub fn new(repository: DynProductBatchRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &ProductBatch) -> Result<(), ProductBatchError> {
        if !self.references.exists(Reference::Product, value.product_id).await? {
            return Err(ProductBatchError::ProductNotFound);
        }
        if !self.references.exists(Reference::Section, value.section_id).await? {
            return Err(ProductBatchError::SectionNotFound);
        }

        if self
            .repository
            .batch_number_taken(value.batch_number, value.id)
            .await?
        {
            warn!("⚠️ batch number already in use");
            return Err(ProductBatchError::BatchNumberAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> ProductBatchError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("product_batches_batch_number_key") => Some(ProductBatchError::BatchNumberAlreadyExists),
        Some("product_batches_product_id_fkey") => Some(ProductBatchError::ProductNotFound),
        Some("product_batches_section_id_fkey") => Some(ProductBatchError::SectionNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| ProductBatchError::Repo(err))
}

#[async_trait]
impl ProductBatchServiceTrait for ProductBatchService {
    async fn find_all(&self) -> Result<Vec<ProductBatch>, ProductBatchError> {
        info!("🔍 Listing product batches");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductBatch, ProductBatchError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductBatchError::NotFound)
    }

    async fn save(&self, value: &ProductBatch) -> Result<i32, ProductBatchError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored product batch id={id}");
        Ok(id)
    }

    async fn update(&self, value: &ProductBatch) -> Result<(), ProductBatchError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(ProductBatchError::NotFound);
        }

        info!("✅ Updated product batch id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ProductBatchError> {
        if !self.repository.delete(id).await? {
            return Err(ProductBatchError::NotFound);
        }

        info!("🗑️ Deleted product batch id={id}");
        Ok(())
    }
}
