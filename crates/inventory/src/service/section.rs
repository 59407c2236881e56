use crate::{
    abstract_trait::{
        reference::{DynReferenceRepository, Reference},
        section::{DynSectionRepository, SectionServiceTrait},
    },
    domain::response::report::SectionProductsReport,
    errors::SectionError,
    model::Section,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct SectionService {
    repository: DynSectionRepository,
    references: DynReferenceRepository,
}

impl SectionService {
    pub fn new(repository: DynSectionRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &Section) -> Result<(), SectionError> {
        if !self.references.exists(Reference::Warehouse, value.warehouse_id).await? {
            return Err(SectionError::WarehouseNotFound);
        }
        if !self.references.exists(Reference::ProductType, value.product_type_id).await? {
            return Err(SectionError::ProductTypeNotFound);
        }

        if self
            .repository
            .section_number_taken(value.section_number, value.id)
            .await?
        {
            warn!("⚠️ section number already in use");
            return Err(SectionError::DuplicateNumber);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> SectionError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("sections_section_number_key") => Some(SectionError::DuplicateNumber),
        Some("sections_warehouse_id_fkey") => Some(SectionError::WarehouseNotFound),
        Some("sections_product_type_id_fkey") => Some(SectionError::ProductTypeNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| SectionError::Repo(err))
}

#[async_trait]
impl SectionServiceTrait for SectionService {
    async fn find_all(&self) -> Result<Vec<Section>, SectionError> {
        info!("🔍 Listing sections");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Section, SectionError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SectionError::NotFound)
    }

    async fn save(&self, value: &Section) -> Result<i32, SectionError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored section id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Section) -> Result<(), SectionError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(SectionError::NotFound);
        }

        info!("✅ Updated section id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), SectionError> {
        if !self.repository.delete(id).await? {
            return Err(SectionError::NotFound);
        }

        info!("🗑️ Deleted section id={id}");
        Ok(())
    }

    async fn report_products(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<SectionProductsReport>, SectionError> {
        let rows = self.repository.report_products(id).await?;

        if id.is_some() && rows.is_empty() {
            return Err(SectionError::NotFound);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::section::SectionRepositoryTrait,
        service::testing::{foreign_key, known, unique},
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemorySections {
        rows: Mutex<Vec<Section>>,
        // constraint name the next write fails with, as a concurrent writer would cause
        violation: Option<&'static str>,
    }

    #[async_trait]
    impl SectionRepositoryTrait for InMemorySections {
        async fn find_all(&self) -> Result<Vec<Section>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Section>, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
        }

        async fn section_number_taken(
            &self,
            value: i32,
            exclude_id: i32,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|s| s.section_number == value && s.id != exclude_id))
        }

        async fn create(&self, value: &Section) -> Result<i32, RepositoryError> {
            if let Some(constraint) = self.violation {
                return Err(unique(constraint));
            }
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i32 + 1;
            rows.push(Section {
                id,
                ..value.clone()
            });
            Ok(id)
        }

        async fn update(&self, value: &Section) -> Result<bool, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|s| s.id == value.id) {
                Some(row) => {
                    *row = value.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|s| s.id != id);
            Ok(rows.len() < before)
        }

        async fn report_products(
            &self,
            _id: Option<i32>,
        ) -> Result<Vec<SectionProductsReport>, RepositoryError> {
            Ok(vec![])
        }
    }

    fn service(repository: InMemorySections) -> SectionService {
        SectionService::new(
            Arc::new(repository),
            known(&[(Reference::Warehouse, 1), (Reference::ProductType, 1)]),
        )
    }

    fn section(section_number: i32) -> Section {
        Section {
            id: 0,
            section_number,
            current_temperature: 2.0,
            minimum_temperature: -5.0,
            current_capacity: 10,
            minimum_capacity: 5,
            maximum_capacity: 20,
            warehouse_id: 1,
            product_type_id: 1,
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let service = service(InMemorySections::default());

        assert_eq!(service.save(&section(10)).await.unwrap(), 1);
        assert_eq!(service.save(&section(11)).await.unwrap(), 2);
        assert_eq!(service.find_by_id(2).await.unwrap().section_number, 11);
    }

    #[tokio::test]
    async fn save_rejects_taken_section_number() {
        let service = service(InMemorySections::default());
        service.save(&section(10)).await.unwrap();

        let err = service.save(&section(10)).await.unwrap_err();
        assert!(matches!(err, SectionError::DuplicateNumber));
    }

    #[tokio::test]
    async fn save_checks_references_first() {
        let service = service(InMemorySections::default());

        let err = service
            .save(&Section {
                warehouse_id: 9,
                ..section(10)
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SectionError::WarehouseNotFound));

        let err = service
            .save(&Section {
                product_type_id: 9,
                ..section(10)
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SectionError::ProductTypeNotFound));
    }

    #[tokio::test]
    async fn unique_violation_from_the_store_maps_to_duplicate() {
        let service = service(InMemorySections {
            violation: Some("sections_section_number_key"),
            ..Default::default()
        });

        let err = service.save(&section(10)).await.unwrap_err();
        assert!(matches!(err, SectionError::DuplicateNumber));
    }

    #[test]
    fn classify_maps_section_constraints() {
        assert!(matches!(
            classify(unique("sections_section_number_key")),
            SectionError::DuplicateNumber
        ));
        assert!(matches!(
            classify(foreign_key("sections_warehouse_id_fkey")),
            SectionError::WarehouseNotFound
        ));
        assert!(matches!(
            classify(foreign_key("sections_product_type_id_fkey")),
            SectionError::ProductTypeNotFound
        ));
        assert!(matches!(
            classify(unique("sections_pkey")),
            SectionError::Repo(_)
        ));
    }

    #[tokio::test]
    async fn update_may_keep_its_own_number() {
        let service = service(InMemorySections::default());
        let id = service.save(&section(10)).await.unwrap();

        let changed = Section {
            id,
            current_capacity: 15,
            ..section(10)
        };
        service.update(&changed).await.unwrap();

        assert_eq!(service.find_by_id(id).await.unwrap(), changed);
    }

    #[tokio::test]
    async fn delete_missing_section_is_not_found() {
        let service = service(InMemorySections::default());

        let err = service.delete(1).await.unwrap_err();
        assert!(matches!(err, SectionError::NotFound));
        assert_eq!(err.to_string(), "section not found");
    }

    #[tokio::test]
    async fn report_for_unknown_section_is_not_found() {
        let service = service(InMemorySections::default());

        assert!(service.report_products(None).await.unwrap().is_empty());
        assert!(matches!(
            service.report_products(Some(4)).await.unwrap_err(),
            SectionError::NotFound
        ));
    }
}
