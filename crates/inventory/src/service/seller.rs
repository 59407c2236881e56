use crate::{
    abstract_trait::{
        seller::{DynSellerRepository, SellerServiceTrait},
        reference::{DynReferenceRepository, Reference},
    },
    errors::SellerError,
    model::Seller,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct SellerService {
    repository: DynSellerRepository,
    references: DynReferenceRepository,
}

impl SellerService {
    pub fn new(repository: DynSellerRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &Seller) -> Result<(), SellerError> {
        if !self.references.exists(Reference::Locality, value.locality_id).await? {
            return Err(SellerError::LocalityNotFound);
        }

        if self.repository.cid_taken(value.cid, value.id).await? {
            warn!("⚠️ cid already in use");
            return Err(SellerError::CidAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> SellerError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("sellers_cid_key") => Some(SellerError::CidAlreadyExists),
        Some("sellers_locality_id_fkey") => Some(SellerError::LocalityNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| SellerError::Repo(err))
}

#[async_trait]
impl SellerServiceTrait for SellerService {
    async fn find_all(&self) -> Result<Vec<Seller>, SellerError> {
        info!("🔍 Listing sellers");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Seller, SellerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SellerError::NotFound)
    }

    async fn save(&self, value: &Seller) -> Result<i32, SellerError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored seller id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Seller) -> Result<(), SellerError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(SellerError::NotFound);
        }

        info!("✅ Updated seller id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), SellerError> {
        if !self.repository.delete(id).await? {
            return Err(SellerError::NotFound);
        }

        info!("🗑️ Deleted seller id={id}");
        Ok(())
    }
}
