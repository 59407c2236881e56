use crate::{
    abstract_trait::{
        employee::{DynEmployeeRepository, EmployeeServiceTrait},
        reference::{DynReferenceRepository, Reference},
    },
    domain::response::report::EmployeeInboundOrdersReport,
    errors::EmployeeError,
    model::Employee,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{info, warn};

#[derive(Clone)]
pub struct EmployeeService {
    repository: DynEmployeeRepository,
    references: DynReferenceRepository,
}

impl EmployeeService {
    pub fn new(repository: DynEmployeeRepository, references: DynReferenceRepository) -> Self {
        Self {
            repository,
            references,
        }
    }

    async fn check_conflicts(&self, value: &Employee) -> Result<(), EmployeeError> {
        if !self.references.exists(Reference::Warehouse, value.warehouse_id).await? {
            return Err(EmployeeError::WarehouseNotFound);
        }

        if self
            .repository
            .card_number_taken(&value.card_number_id, value.id)
            .await?
        {
            warn!("⚠️ card number id already in use");
            return Err(EmployeeError::CardNumberAlreadyExists);
        }

        Ok(())
    }
}

/// Maps constraint violations raised by the database onto the same errors
/// the up-front checks produce.
fn classify(err: RepositoryError) -> EmployeeError {
    let known = match err.unique_constraint().or(err.foreign_key()) {
        Some("employees_card_number_id_key") => Some(EmployeeError::CardNumberAlreadyExists),
        Some("employees_warehouse_id_fkey") => Some(EmployeeError::WarehouseNotFound),
        _ => None,
    };

    known.unwrap_or_else(|| EmployeeError::Repo(err))
}

#[async_trait]
impl EmployeeServiceTrait for EmployeeService {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        info!("🔍 Listing employees");
        Ok(self.repository.find_all().await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound)
    }

    async fn save(&self, value: &Employee) -> Result<i32, EmployeeError> {
        self.check_conflicts(value).await?;

        let id = self.repository.create(value).await.map_err(classify)?;

        info!("✅ Stored employee id={id}");
        Ok(id)
    }

    async fn update(&self, value: &Employee) -> Result<(), EmployeeError> {
        self.check_conflicts(value).await?;

        if !self.repository.update(value).await.map_err(classify)? {
            return Err(EmployeeError::NotFound);
        }

        info!("✅ Updated employee id={}", value.id);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), EmployeeError> {
        if !self.repository.delete(id).await? {
            return Err(EmployeeError::NotFound);
        }

        info!("🗑️ Deleted employee id={id}");
        Ok(())
    }

    async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<EmployeeInboundOrdersReport>, EmployeeError> {
        let rows = self.repository.report_inbound_orders(id).await?;

        if id.is_some() && rows.is_empty() {
            return Err(EmployeeError::NotFound);
        }

        Ok(rows)
    }
}
