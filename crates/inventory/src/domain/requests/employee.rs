use crate::model::Employee;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const EMPLOYEE_FIELDS: &[&str] = &["card_number_id", "first_name", "last_name", "warehouse_id"];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EmployeeRequest {
    #[validate(length(min = 1, message = "card_number_id cannot be empty"))]
    pub card_number_id: String,
    #[validate(length(min = 1, message = "first_name cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name cannot be empty"))]
    pub last_name: String,
    #[validate(range(min = 1, message = "warehouse_id must be greater than 0"))]
    pub warehouse_id: i32,
}

impl EmployeeRequest {
    pub fn into_model(self, id: i32) -> Employee {
        Employee {
            id,
            card_number_id: self.card_number_id,
            first_name: self.first_name,
            last_name: self.last_name,
            warehouse_id: self.warehouse_id,
        }
    }
}

impl From<Employee> for EmployeeRequest {
    fn from(value: Employee) -> Self {
        Self {
            card_number_id: value.card_number_id,
            first_name: value.first_name,
            last_name: value.last_name,
            warehouse_id: value.warehouse_id,
        }
    }
}
