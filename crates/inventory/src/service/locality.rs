use crate::{
    abstract_trait::locality::{DynLocalityRepository, LocalityServiceTrait},
    domain::response::report::LocalitySellersReport,
    errors::LocalityError,
    model::Locality,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct LocalityService {
    repository: DynLocalityRepository,
}

impl LocalityService {
    pub fn new(repository: DynLocalityRepository) -> Self {
        Self { repository }
    }

    async fn check_conflicts(&self, value: &Locality) -> Result<(), LocalityError> {
        if self
            .repository
            .postal_code_taken(value.postal_code, value.id)
            .await?
        {
            warn!("⚠️ postal code already in use");
            return Err(LocalityError::AlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> LocalityError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("localities_postal_code_key") => Some(LocalityError::AlreadyExists),
        _ => None,
    };

    known.unwrap_or_else(|| LocalityError::Repo(err))
}

#[async_trait]
impl LocalityServiceTrait for LocalityService {
    async fn find_all(&self) -> Result<Vec<Locality>, LocalityError> {
        info!("🔍 Listing localities");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Locality, LocalityError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(LocalityError::NotFound)
    }

    async fn save(&self, value: &Locality) -> Result<i32, LocalityError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored locality id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Locality) -> Result<(), LocalityError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(LocalityError::NotFound);
        }

        info!("✅ Updated locality id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), LocalityError> {
        if !self.repository.delete(id).await? {
            return Err(LocalityError::NotFound);
        }

        info!("🗑️ Deleted locality id={id}");
        Ok(())
    }

    async fn report_sellers(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<LocalitySellersReport>, LocalityError> {
        let rows = self.repository.report_sellers(id).await?;

        // the report joins from localities, so a known id always yields a row
        if id.is_some() && rows.is_empty() {
            return Err(LocalityError::NotFound);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::locality::LocalityRepositoryTrait, service::testing::unique};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryLocalities {
        rows: Mutex<Vec<Locality>>,
        violation: Option<&'static str>,
    }

    #[async_trait]
    impl LocalityRepositoryTrait for InMemoryLocalities {
        async fn find_all(&self) -> Result<Vec<Locality>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Locality>, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().find(|l| l.id == id).cloned())
        }

        async fn postal_code_taken(
            &self,
            value: i32,
            exclude_id: i32,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|l| l.postal_code == value && l.id != exclude_id))
        }

        async fn create(&self, value: &Locality) -> Result<i32, RepositoryError> {
            if let Some(constraint) = self.violation {
                return Err(unique(constraint));
            }
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i32 + 1;
            rows.push(Locality {
                id,
                ..value.clone()
            });
            Ok(id)
        }

        async fn update(&self, value: &Locality) -> Result<bool, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|l| l.id == value.id) {
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
            rows.retain(|l| l.id != id);
            Ok(rows.len() < before)
        }

        async fn report_sellers(
            &self,
            id: Option<i32>,
        ) -> Result<Vec<LocalitySellersReport>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|l| id.is_none_or(|id| l.id == id))
                .map(|l| LocalitySellersReport {
                    locality_id: l.id,
                    locality_name: l.locality_name.clone(),
                    sellers_count: 0,
                })
                .collect())
        }
    }

    fn service(repository: InMemoryLocalities) -> LocalityService {
        LocalityService::new(Arc::new(repository))
    }

    fn locality(postal_code: i32) -> Locality {
        Locality {
            id: 0,
            locality_name: "Palermo".into(),
            province_name: "Buenos Aires".into(),
            country_name: "Argentina".into(),
            postal_code,
        }
    }

    #[test]
    fn classify_maps_postal_code_constraint() {
        assert!(matches!(
            classify(unique("localities_postal_code_key")),
            LocalityError::AlreadyExists
        ));
        assert!(matches!(classify(unique("localities_pkey")), LocalityError::Repo(_)));
    }

    #[tokio::test]
    async fn second_locality_with_same_postal_code_is_rejected() {
        let service = service(InMemoryLocalities::default());
        service.save(&locality(1425)).await.unwrap();

        assert!(matches!(
            service.save(&locality(1425)).await.unwrap_err(),
            LocalityError::AlreadyExists
        ));
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_its_own_postal_code() {
        let service = service(InMemoryLocalities::default());
        let id = service.save(&locality(1425)).await.unwrap();

        let renamed = Locality {
            id,
            locality_name: "Recoleta".into(),
            ..locality(1425)
        };
        service.update(&renamed).await.unwrap();

        assert_eq!(service.find_by_id(id).await.unwrap(), renamed);
    }

    #[tokio::test]
    async fn unique_violation_from_the_store_is_already_exists() {
        let service = service(InMemoryLocalities {
            violation: Some("localities_postal_code_key"),
            ..Default::default()
        });

        assert!(matches!(
            service.save(&locality(1425)).await.unwrap_err(),
            LocalityError::AlreadyExists
        ));
    }

    #[tokio::test]
    async fn missing_locality_is_not_found() {
        let service = service(InMemoryLocalities::default());

        assert!(matches!(service.find_by_id(3).await.unwrap_err(), LocalityError::NotFound));
        assert!(matches!(
            service.update(&Locality { id: 3, ..locality(1) }).await.unwrap_err(),
            LocalityError::NotFound
        ));
        assert!(matches!(service.delete(3).await.unwrap_err(), LocalityError::NotFound));
    }

    #[tokio::test]
    async fn sellers_report_requires_a_known_locality() {
        let service = service(InMemoryLocalities::default());
        let id = service.save(&locality(1425)).await.unwrap();

        assert_eq!(service.report_sellers(None).await.unwrap().len(), 1);
        assert_eq!(service.report_sellers(Some(id)).await.unwrap()[0].locality_id, id);
        assert!(matches!(
            service.report_sellers(Some(id + 1)).await.unwrap_err(),
            LocalityError::NotFound
        ));
    }
}
