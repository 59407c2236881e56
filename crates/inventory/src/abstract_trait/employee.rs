use crate::{
    domain::response::report::EmployeeInboundOrdersReport,
    errors::EmployeeError,
    model::Employee,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynEmployeeRepository = Arc<dyn EmployeeRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait EmployeeRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, RepositoryError>;
    async fn card_number_taken(
        &self,
        value: &str,
        exclude_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(&self, value: &Employee) -> Result<i32, RepositoryError>;
    async fn update(&self, value: &Employee) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
    async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<EmployeeInboundOrdersReport>, RepositoryError>;
}

pub type DynEmployeeService = Arc<dyn EmployeeServiceTrait + Send + Sync>;

#[async_trait]
pub trait EmployeeServiceTrait {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeError>;
    async fn find_by_id(&self, id: i32) -> Result<Employee, EmployeeError>;
    async fn save(&self, value: &Employee) -> Result<i32, EmployeeError>;
    async fn update(&self, value: &Employee) -> Result<(), EmployeeError>;
    async fn delete(&self, id: i32) -> Result<(), EmployeeError>;
    async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<EmployeeInboundOrdersReport>, EmployeeError>;
}
