use crate::{
    abstract_trait::{
        inbound_order::{DynInboundOrderRepository, InboundOrderServiceTrait},
        reference::{DynReferenceRepository, Reference},
    },
    errors::InboundOrderError,
    model::InboundOrder,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct InboundOrderService {
    repository: DynInboundOrderRepository,
    references: DynReferenceRepository,
}

impl InboundOrderService {
    pub fn new(repository: DynInboundOrderRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &InboundOrder) -> Result<(), InboundOrderError> {
        if !self.references.exists(Reference::Employee, value.employee_id).await? {
            return Err(InboundOrderError::EmployeeNotFound);
        }
        if !self.references.exists(Reference::ProductBatch, value.product_batch_id).await? {
            return Err(InboundOrderError::ProductBatchNotFound);
        }
        if !self.references.exists(Reference::Warehouse, value.warehouse_id).await? {
            return Err(InboundOrderError::WarehouseNotFound);
        }

        if self
            .repository
            .order_number_taken(&value.order_number, value.id)
            .await?
        {
            warn!("⚠️ order number already in use");
            return Err(InboundOrderError::OrderNumberAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> InboundOrderError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("inbound_orders_order_number_key") => Some(InboundOrderError::OrderNumberAlreadyExists),
        Some("inbound_orders_employee_id_fkey") => Some(InboundOrderError::EmployeeNotFound),
        Some("inbound_orders_product_batch_id_fkey") => Some(InboundOrderError::ProductBatchNotFound),
        Some("inbound_orders_warehouse_id_fkey") => Some(InboundOrderError::WarehouseNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| InboundOrderError::Repo(err))
}

#[async_trait]
impl InboundOrderServiceTrait for InboundOrderService {
    async fn find_all(&self) -> Result<Vec<InboundOrder>, InboundOrderError> {
        info!("🔍 Listing inbound orders");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<InboundOrder, InboundOrderError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(InboundOrderError::NotFound)
    }

    async fn save(&self, value: &InboundOrder) -> Result<i32, InboundOrderError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored inbound order id={id}");
        Ok(id)
    }

    async fn update(&self, value: &InboundOrder) -> Result<(), InboundOrderError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(InboundOrderError::NotFound);
        }

        info!("✅ Updated inbound order id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), InboundOrderError> {
        if !self.repository.delete(id).await? {
            return Err(InboundOrderError::NotFound);
        }

        info!("🗑️ Deleted inbound order id={id}");
        Ok(())
    }
}
