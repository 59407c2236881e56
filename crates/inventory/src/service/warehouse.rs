use crate::{
    abstract_trait::{
        warehouse::{DynWarehouseRepository, WarehouseServiceTrait},
        reference::{DynReferenceRepository, Reference},
    },
    errors::WarehouseError,
    model::Warehouse,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct WarehouseService {
    repository: DynWarehouseRepository,
    references: DynReferenceRepository,
}

impl WarehouseService {
    pub fn new(repository: DynWarehouseRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &Warehouse) -> Result<(), WarehouseError> {
        if let Some(locality_id) = value.locality_id {
            if !self.references.exists(Reference::Locality, locality_id).await? {
                return Err(WarehouseError::LocalityNotFound);
            }
        }

        if self
            .repository
            .code_taken(&value.warehouse_code, value.id)
            .await?
        {
            warn!("⚠️ warehouse code already in use");
            return Err(WarehouseError::CodeAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> WarehouseError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("warehouses_warehouse_code_key") => Some(WarehouseError::CodeAlreadyExists),
        Some("warehouses_locality_id_fkey") => Some(WarehouseError::LocalityNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| WarehouseError::Repo(err))
}

#[async_trait]
impl WarehouseServiceTrait for WarehouseService {
    async fn find_all(&self) -> Result<Vec<Warehouse>, WarehouseError> {
        info!("🔍 Listing warehouses");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Warehouse, WarehouseError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(WarehouseError::NotFound)
    }

    async fn save(&self, value: &Warehouse) -> Result<i32, WarehouseError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored warehouse id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Warehouse) -> Result<(), WarehouseError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(WarehouseError::NotFound);
        }

        info!("✅ Updated warehouse id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), WarehouseError> {
        if !self.repository.delete(id).await? {
            return Err(WarehouseError::NotFound);
        }

        info!("🗑️ Deleted warehouse id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::warehouse::WarehouseRepositoryTrait,
        service::testing::{foreign_key, known, unique},
    };
    use std::sync::Arc;

    #[derive(Default)]
    struct StubWarehouses {
        taken: bool,
        violation: Option<fn() -> RepositoryError>,
        missing: bool,
    }

    #[async_trait]
    impl WarehouseRepositoryTrait for StubWarehouses {
        async fn find_all(&self) -> Result<Vec<Warehouse>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Warehouse>, RepositoryError> {
            Ok(None)
        }

        async fn code_taken(
            &self,
            _value: &str,
            _exclude_id: i32,
        ) -> Result<bool, RepositoryError> {
            Ok(self.taken)
        }

        async fn create(&self, _value: &Warehouse) -> Result<i32, RepositoryError> {
            match self.violation {
                Some(violation) => Err(violation()),
                None => Ok(1),
            }
        }

        async fn update(&self, _value: &Warehouse) -> Result<bool, RepositoryError> {
            match self.violation {
                Some(violation) => Err(violation()),
                None => Ok(!self.missing),
            }
        }

        async fn delete(&self, _id: i32) -> Result<bool, RepositoryError> {
            Ok(!self.missing)
        }
    }

    fn service(repository: StubWarehouses) -> WarehouseService {
        WarehouseService::new(Arc::new(repository), known(&[(Reference::Locality, 1)]))
    }

    fn warehouse(locality_id: Option<i32>) -> Warehouse {
        Warehouse {
            id: 0,
            address: "Ruta 8 km 60".into(),
            telephone: "555-0001".into(),
            warehouse_code: "WH-1".into(),
            minimum_capacity: 100,
            minimum_temperature: -18.0,
            locality_id,
        }
    }

    #[test]
    fn classify_maps_warehouse_constraints() {
        assert!(matches!(
            classify(unique("warehouses_warehouse_code_key")),
            WarehouseError::CodeAlreadyExists
        ));
        assert!(matches!(
            classify(foreign_key("warehouses_locality_id_fkey")),
            WarehouseError::LocalityNotFound
        ));
        assert!(matches!(classify(RepositoryError::NotFound), WarehouseError::Repo(_)));
    }

    #[tokio::test]
    async fn locality_is_only_checked_when_present() {
        let service = service(StubWarehouses::default());

        assert_eq!(service.save(&warehouse(None)).await.unwrap(), 1);
        assert_eq!(service.save(&warehouse(Some(1))).await.unwrap(), 1);
        assert!(matches!(
            service.save(&warehouse(Some(2))).await.unwrap_err(),
            WarehouseError::LocalityNotFound
        ));
    }

    #[tokio::test]
    async fn taken_code_is_a_duplicate() {
        let service = service(StubWarehouses {
            taken: true,
            ..Default::default()
        });

        assert!(matches!(
            service.save(&warehouse(None)).await.unwrap_err(),
            WarehouseError::CodeAlreadyExists
        ));
    }

    #[tokio::test]
    async fn code_race_on_insert_is_a_duplicate() {
        let service = service(StubWarehouses {
            violation: Some(|| unique("warehouses_warehouse_code_key")),
            ..Default::default()
        });

        assert!(matches!(
            service.save(&warehouse(None)).await.unwrap_err(),
            WarehouseError::CodeAlreadyExists
        ));
    }

    #[tokio::test]
    async fn missing_warehouse_is_not_found() {
        let service = service(StubWarehouses {
            missing: true,
            ..Default::default()
        });

        assert!(matches!(
            service
                .update(&Warehouse {
                    id: 6,
                    ..warehouse(None)
                })
                .await
                .unwrap_err(),
            WarehouseError::NotFound
        ));
        assert!(matches!(service.delete(6).await.unwrap_err(), WarehouseError::NotFound));
    }
}
