use crate::{
    abstract_trait::{
        product_record::{DynProductRecordRepository, ProductRecordServiceTrait},
        reference::{DynReferenceRepository, Reference},
    },
    errors::ProductRecordError,
    model::ProductRecord,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ProductRecordService {
    repository: DynProductRecordRepository,
    references: DynReferenceRepository,
}

impl ProductRecordService {
    pub fn new(repository: DynProductRecordRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }
}

#[async_trait]
impl ProductRecordServiceTrait for ProductRecordService {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, ProductRecordError> {
        info!("🔍 Listing product records");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductRecord, ProductRecordError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductRecordError::NotFound)
    }

    async fn save(&self, value: &ProductRecord) -> Result<i32, ProductRecordError> {
        if !self
            .references
            .exists(Reference::Product, value.product_id)
            .await?
        {
            return Err(ProductRecordError::ProductNotFound);
        }

        let id = self.repository.create(value).await.map_err(|err| {
            if err.foreign_key() == Some("product_records_product_id_fkey") {
                ProductRecordError::ProductNotFound
            } else {
                ProductRecordError::Repo(err)
            }
        })?;

        info!("✅ Stored product record id={id}");
        Ok(id)
    }
}
