use crate::{
    abstract_trait::buyer::{BuyerServiceTrait, DynBuyerRepository},
    domain::response::report::BuyerPurchaseOrdersReport,
    errors::BuyerError,
    model::Buyer,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct BuyerService {
    repository: DynBuyerRepository,
}

impl BuyerService {
    pub fn new(repository: DynBuyerRepository) -> Self {
        Self { repository }
    }

    async fn check_conflicts(&self, value: &Buyer) -> Result<(), BuyerError> {
        if self
            .repository
            .card_number_taken(&value.card_number_id, value.id)
            .await?
        {
            warn!("⚠️ card number id already in use");
            return Err(BuyerError::CardNumberAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> BuyerError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("buyers_card_number_id_key") => Some(BuyerError::CardNumberAlreadyExists),
        _ => None,
    };

    known.unwrap_or_else(|| BuyerError::Repo(err))
}

#[async_trait]
impl BuyerServiceTrait for BuyerService {
    async fn find_all(&self) -> Result<Vec<Buyer>, BuyerError> {
        info!("🔍 Listing buyers");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Buyer, BuyerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BuyerError::NotFound)
    }

    async fn save(&self, value: &Buyer) -> Result<i32, BuyerError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored buyer id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Buyer) -> Result<(), BuyerError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(BuyerError::NotFound);
        }

        info!("✅ Updated buyer id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), BuyerError> {
        if !self.repository.delete(id).await? {
            return Err(BuyerError::NotFound);
        }

        info!("🗑️ Deleted buyer id={id}");
        Ok(())
    }

    async fn report_purchase_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<BuyerPurchaseOrdersReport>, BuyerError> {
        let rows = self.repository.report_purchase_orders(id).await?;

        if id.is_some() && rows.is_empty() {
            return Err(BuyerError::NotFound);
        }

        Ok(rows)
    }
}
