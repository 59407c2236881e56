use crate::model::Warehouse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const WAREHOUSE_FIELDS: &[&str] = &[
    "address",
    "telephone",
    "warehouse_code",
    "minimum_capacity",
    "minimum_temperature",
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WarehouseRequest {
    #[validate(length(min = 1, message = "address cannot be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "telephone cannot be empty"))]
    pub telephone: String,
    #[validate(length(min = 1, message = "warehouse_code cannot be empty"))]
    pub warehouse_code: String,
    #[validate(range(min = 0, message = "minimum_capacity cannot be negative"))]
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    #[serde(default)]
    #[validate(range(min = 1, message = "locality_id must be greater than 0"))]
    pub locality_id: Option<i32>,
}

impl WarehouseRequest {
    pub fn into_model(self, id: i32) -> Warehouse {
        Warehouse {
            id,
            address: self.address,
            telephone: self.telephone,
            warehouse_code: self.warehouse_code,
            minimum_capacity: self.minimum_capacity,
            minimum_temperature: self.minimum_temperature,
            locality_id: self.locality_id,
        }
    }
}

impl From<Warehouse> for WarehouseRequest {
    fn from(value: Warehouse) -> Self {
        Self {
            address: value.address,
            telephone: value.telephone,
            warehouse_code: value.warehouse_code,
            minimum_capacity: value.minimum_capacity,
            minimum_temperature: value.minimum_temperature,
            locality_id: value.locality_id,
        }
    }
}
