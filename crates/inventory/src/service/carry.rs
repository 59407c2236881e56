use crate::{
    abstract_trait::{
        carry::{CarryServiceTrait, DynCarryRepository},
        reference::{DynReferenceRepository, Reference},
    },
    domain::response::report::LocalityCarriesReport,
    errors::CarryError,
    model::Carry,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct CarryService {
    repository: DynCarryRepository,
    references: DynReferenceRepository,
}

impl CarryService {
    pub fn new(repository: DynCarryRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &Carry) -> Result<(), CarryError> {
        if !self.references.exists(Reference::Locality, value.locality_id).await? {
            return Err(CarryError::LocalityNotFound);
        }

        if self.repository.cid_taken(&value.cid, value.id).await? {
            warn!("⚠️ cid already in use");
            return Err(CarryError::CidAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> CarryError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("carries_cid_key") => Some(CarryError::CidAlreadyExists),
        Some("carries_locality_id_fkey") => Some(CarryError::LocalityNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| CarryError::Repo(err))
}

#[async_trait]
impl CarryServiceTrait for CarryService {
    async fn find_all(&self) -> Result<Vec<Carry>, CarryError> {
        info!("🔍 Listing carries");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Carry, CarryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CarryError::NotFound)
    }

    async fn save(&self, value: &Carry) -> Result<i32, CarryError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored carry id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Carry) -> Result<(), CarryError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(CarryError::NotFound);
        }

        info!("✅ Updated carry id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), CarryError> {
        if !self.repository.delete(id).await? {
            return Err(CarryError::NotFound);
        }

        info!("🗑️ Deleted carry id={id}");
        Ok(())
    }

    async fn report_by_locality(
        &self,
        locality_id: Option<i32>,
    ) -> Result<Vec<LocalityCarriesReport>, CarryError> {
        let rows = self.repository.report_by_locality(locality_id).await?;

        if locality_id.is_some() && rows.is_empty() {
            return Err(CarryError::LocalityNotFound);
        }

        Ok(rows)
    }
}
