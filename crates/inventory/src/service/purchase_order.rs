use crate::{
    abstract_trait::{
        purchase_order::{DynPurchaseOrderRepository, PurchaseOrderServiceTrait},
        reference::{DynReferenceRepository, Reference},
    },
    errors::PurchaseOrderError,
    model::PurchaseOrder,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct PurchaseOrderService {
    repository: DynPurchaseOrderRepository,
    references: DynReferenceRepository,
}

impl PurchaseOrderService {
    pub fn new(repository: DynPurchaseOrderRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &PurchaseOrder) -> Result<(), PurchaseOrderError> {
        if !self.references.exists(Reference::Buyer, value.buyer_id).await? {
            return Err(PurchaseOrderError::BuyerNotFound);
        }
        if !self.references.exists(Reference::ProductRecord, value.product_record_id).await? {
            return Err(PurchaseOrderError::ProductRecordNotFound);
        }
        if !self.references.exists(Reference::OrderStatus, value.order_status_id).await? {
            return Err(PurchaseOrderError::OrderStatusNotFound);
        }

        if self
            .repository
            .order_number_taken(&value.order_number, value.id)
            .await?
        {
            warn!("⚠️ order number already in use");
            return Err(PurchaseOrderError::OrderNumberAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> PurchaseOrderError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("purchase_orders_order_number_key") => Some(PurchaseOrderError::OrderNumberAlreadyExists),
        Some("purchase_orders_buyer_id_fkey") => Some(PurchaseOrderError::BuyerNotFound),
        Some("purchase_orders_product_record_id_fkey") => Some(PurchaseOrderError::ProductRecordNotFound),
        Some("purchase_orders_order_status_id_fkey") => Some(PurchaseOrderError::OrderStatusNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| PurchaseOrderError::Repo(err))
}

#[async_trait]
impl PurchaseOrderServiceTrait for PurchaseOrderService {
    async fn find_all(&self) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        info!("🔍 Listing purchase orders");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PurchaseOrderError::NotFound)
    }

    async fn save(&self, value: &PurchaseOrder) -> Result<i32, PurchaseOrderError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored purchase order id={id}");
        Ok(id)
    }

    async fn update(&self, value: &PurchaseOrder) -> Result<(), PurchaseOrderError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(PurchaseOrderError::NotFound);
        }

        info!("✅ Updated purchase order id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), PurchaseOrderError> {
        if !self.repository.delete(id).await? {
            return Err(PurchaseOrderError::NotFound);
        }

        info!("🗑️ Deleted purchase order id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::purchase_order::PurchaseOrderRepositoryTrait,
        service::testing::{foreign_key, known, unique},
    };
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[derive(Default)]
    struct StubOrders {
        taken: bool,
        violation: Option<fn() -> RepositoryError>,
        missing: bool,
    }

    #[async_trait]
    impl PurchaseOrderRepositoryTrait for StubOrders {
        async fn find_all(&self) -> Result<Vec<PurchaseOrder>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<PurchaseOrder>, RepositoryError> {
            Ok(None)
        }

        async fn order_number_taken(
            &self,
            _value: &str,
            _exclude_id: i32,
        ) -> Result<bool, RepositoryError> {
            Ok(self.taken)
        }

        async fn create(&self, _value: &PurchaseOrder) -> Result<i32, RepositoryError> {
            match self.violation {
                Some(violation) => Err(violation()),
                None => Ok(1),
            }
        }

        async fn update(&self, _value: &PurchaseOrder) -> Result<bool, RepositoryError> {
            match self.violation {
                Some(violation) => Err(violation()),
                None => Ok(!self.missing),
            }
        }

        async fn delete(&self, _id: i32) -> Result<bool, RepositoryError> {
            Ok(!self.missing)
        }
    }

    fn service(repository: StubOrders) -> PurchaseOrderService {
        PurchaseOrderService::new(
            Arc::new(repository),
            known(&[
                (Reference::Buyer, 1),
                (Reference::ProductRecord, 2),
                (Reference::OrderStatus, 1),
            ]),
        )
    }

    fn order() -> PurchaseOrder {
        PurchaseOrder {
            id: 0,
            order_number: "PO-1".into(),
            order_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            tracking_code: "TRK-1".into(),
            buyer_id: 1,
            product_record_id: 2,
            order_status_id: 1,
        }
    }

    #[test]
    fn classify_maps_purchase_order_constraints() {
        assert!(matches!(
            classify(unique("purchase_orders_order_number_key")),
            PurchaseOrderError::OrderNumberAlreadyExists
        ));
        assert!(matches!(
            classify(foreign_key("purchase_orders_buyer_id_fkey")),
            PurchaseOrderError::BuyerNotFound
        ));
        assert!(matches!(
            classify(foreign_key("purchase_orders_product_record_id_fkey")),
            PurchaseOrderError::ProductRecordNotFound
        ));
        assert!(matches!(
            classify(foreign_key("purchase_orders_order_status_id_fkey")),
            PurchaseOrderError::OrderStatusNotFound
        ));
        assert!(matches!(
            classify(foreign_key("purchase_orders_unknown_fkey")),
            PurchaseOrderError::Repo(_)
        ));
    }

    #[tokio::test]
    async fn references_are_checked_in_order() {
        let service = service(StubOrders::default());

        let err = service
            .save(&PurchaseOrder {
                buyer_id: 9,
                product_record_id: 9,
                ..order()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PurchaseOrderError::BuyerNotFound));

        let err = service
            .save(&PurchaseOrder {
                product_record_id: 9,
                ..order()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PurchaseOrderError::ProductRecordNotFound));

        let err = service
            .save(&PurchaseOrder {
                order_status_id: 9,
                ..order()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PurchaseOrderError::OrderStatusNotFound));
    }

    #[tokio::test]
    async fn taken_order_number_is_a_duplicate() {
        let service = service(StubOrders {
            taken: true,
            ..Default::default()
        });

        assert!(matches!(
            service.save(&order()).await.unwrap_err(),
            PurchaseOrderError::OrderNumberAlreadyExists
        ));
    }

    #[tokio::test]
    async fn buyer_removed_before_insert_is_reported() {
        let service = service(StubOrders {
            violation: Some(|| foreign_key("purchase_orders_buyer_id_fkey")),
            ..Default::default()
        });

        assert!(matches!(
            service.save(&order()).await.unwrap_err(),
            PurchaseOrderError::BuyerNotFound
        ));
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let service = service(StubOrders {
            missing: true,
            ..Default::default()
        });

        assert!(matches!(
            service.find_by_id(4).await.unwrap_err(),
            PurchaseOrderError::NotFound
        ));
        assert!(matches!(
            service
                .update(&PurchaseOrder { id: 4, ..order() })
                .await
                .unwrap_err(),
            PurchaseOrderError::NotFound
        ));
        assert!(matches!(
            service.delete(4).await.unwrap_err(),
            PurchaseOrderError::NotFound
        ));
    }
}
