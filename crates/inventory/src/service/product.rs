use crate::{
    abstract_trait::{
        product::{DynProductRepository, ProductServiceTrait},
        reference::{DynReferenceRepository, Reference},
    },
    domain::response::report::ProductRecordsReport,
    errors::ProductError,
    model::Product,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
    references: DynReferenceRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &Product) -> Result<(), ProductError> {
        if !self.references.exists(Reference::ProductType, value.product_type_id).await? {
            return Err(ProductError::ProductTypeNotFound);
        }
        if let Some(seller_id) = value.seller_id {
            if !self.references.exists(Reference::Seller, seller_id).await? {
                return Err(ProductError::SellerNotFound);
            }
        }

        if self
            .repository
            .product_code_taken(&value.product_code, value.id)
            .await?
        {
            warn!("⚠️ product code already in use");
            return Err(ProductError::CodeAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> ProductError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("products_product_code_key") => Some(ProductError::CodeAlreadyExists),
        Some("products_product_type_id_fkey") => Some(ProductError::ProductTypeNotFound),
        Some("products_seller_id_fkey") => Some(ProductError::SellerNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| ProductError::Repo(err))
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        info!("🔍 Listing products");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    async fn save(&self, value: &Product) -> Result<i32, ProductError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored product id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Product) -> Result<(), ProductError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(ProductError::NotFound);
        }

        info!("✅ Updated product id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ProductError> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound);
        }

        info!("🗑️ Deleted product id={id}");
        Ok(())
    }

    async fn report_records(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<ProductRecordsReport>, ProductError> {
        let rows = self.repository.report_records(id).await?;

        if id.is_some() && rows.is_empty() {
            return Err(ProductError::NotFound);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::ProductRepositoryTrait,
        service::testing::{foreign_key, known, unique},
    };
    use std::sync::Arc;

    #[derive(Default)]
    struct StubProducts {
        taken: bool,
        violation: Option<fn() -> RepositoryError>,
        missing: bool,
        report: Vec<ProductRecordsReport>,
    }

    #[async_trait]
    impl ProductRepositoryTrait for StubProducts {
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(None)
        }

        async fn product_code_taken(
            &self,
            _value: &str,
            _exclude_id: i32,
        ) -> Result<bool, RepositoryError> {
            Ok(self.taken)
        }

        async fn create(&self, _value: &Product) -> Result<i32, RepositoryError> {
            match self.violation {
                Some(violation) => Err(violation()),
                None => Ok(11),
            }
        }

        async fn update(&self, _value: &Product) -> Result<bool, RepositoryError> {
            match self.violation {
                Some(violation) => Err(violation()),
                None => Ok(!self.missing),
            }
        }

        async fn delete(&self, _id: i32) -> Result<bool, RepositoryError> {
            Ok(!self.missing)
        }

        async fn report_records(
            &self,
            _id: Option<i32>,
        ) -> Result<Vec<ProductRecordsReport>, RepositoryError> {
            Ok(self.report.clone())
        }
    }

    fn service(repository: StubProducts) -> ProductService {
        ProductService::new(
            Arc::new(repository),
            known(&[(Reference::ProductType, 1), (Reference::Seller, 2)]),
        )
    }

    fn product(product_type_id: i32, seller_id: Option<i32>) -> Product {
        Product {
            id: 0,
            description: "Frozen peas".into(),
            expiration_rate: 1.5,
            freezing_rate: 2.5,
            height: 10.0,
            length: 20.0,
            netweight: 0.5,
            product_code: "PEA-1".into(),
            recommended_freezing_temperature: 18.0,
            width: 5.0,
            product_type_id,
            seller_id,
        }
    }

    #[test]
    fn classify_maps_product_constraints() {
        assert!(matches!(
            classify(unique("products_product_code_key")),
            ProductError::CodeAlreadyExists
        ));
        assert!(matches!(
            classify(foreign_key("products_product_type_id_fkey")),
            ProductError::ProductTypeNotFound
        ));
        assert!(matches!(
            classify(foreign_key("products_seller_id_fkey")),
            ProductError::SellerNotFound
        ));
        assert!(matches!(classify(unique("products_pkey")), ProductError::Repo(_)));
    }

    #[tokio::test]
    async fn references_are_checked_only_when_set() {
        let service = service(StubProducts::default());

        assert_eq!(service.save(&product(1, None)).await.unwrap(), 11);
        assert_eq!(service.save(&product(1, Some(2))).await.unwrap(), 11);
        assert!(matches!(
            service.save(&product(5, None)).await.unwrap_err(),
            ProductError::ProductTypeNotFound
        ));
        assert!(matches!(
            service.save(&product(1, Some(9))).await.unwrap_err(),
            ProductError::SellerNotFound
        ));
    }

    #[tokio::test]
    async fn taken_code_is_a_duplicate() {
        let service = service(StubProducts {
            taken: true,
            ..Default::default()
        });

        assert!(matches!(
            service.save(&product(1, None)).await.unwrap_err(),
            ProductError::CodeAlreadyExists
        ));
    }

    #[tokio::test]
    async fn seller_removed_before_insert_is_reported() {
        let service = service(StubProducts {
            violation: Some(|| foreign_key("products_seller_id_fkey")),
            ..Default::default()
        });

        assert!(matches!(
            service.save(&product(1, Some(2))).await.unwrap_err(),
            ProductError::SellerNotFound
        ));
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let service = service(StubProducts {
            missing: true,
            ..Default::default()
        });

        assert!(matches!(service.find_by_id(1).await.unwrap_err(), ProductError::NotFound));
        assert!(matches!(
            service
                .update(&Product {
                    id: 1,
                    ..product(1, None)
                })
                .await
                .unwrap_err(),
            ProductError::NotFound
        ));
        assert!(matches!(service.delete(1).await.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn records_report_for_unknown_product_is_not_found() {
        let service = service(StubProducts::default());

        assert!(service.report_records(None).await.unwrap().is_empty());
        assert!(matches!(
            service.report_records(Some(1)).await.unwrap_err(),
            ProductError::NotFound
        ));
    }

    #[tokio::test]
    async fn records_report_returns_repository_rows() {
        let rows = vec![ProductRecordsReport {
            product_id: 1,
            description: "Frozen peas".into(),
            records_count: 3,
        }];
        let service = service(StubProducts {
            report: rows.clone(),
            ..Default::default()
        });

        assert_eq!(service.report_records(Some(1)).await.unwrap(), rows);
    }
}
