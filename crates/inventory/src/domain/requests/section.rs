use crate::model::Section;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const SECTION_FIELDS: &[&str] = &[
    "section_number",
    "current_temperature",
    "minimum_temperature",
    "current_capacity",
    "minimum_capacity",
    "maximum_capacity",
    "warehouse_id",
    "product_type_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SectionRequest {
    #[validate(range(min = 1, message = "section_number must be greater than 0"))]
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    #[validate(range(min = 0, message = "current_capacity cannot be negative"))]
    pub current_capacity: i32,
    #[validate(range(min = 0, message = "minimum_capacity cannot be negative"))]
    pub minimum_capacity: i32,
    #[validate(range(min = 0, message = "maximum_capacity cannot be negative"))]
    pub maximum_capacity: i32,
    #[validate(range(min = 1, message = "warehouse_id must be greater than 0"))]
    pub warehouse_id: i32,
    #[validate(range(min = 1, message = "product_type_id must be greater than 0"))]
    pub product_type_id: i32,
}

impl SectionRequest {
    pub fn into_model(self, id: i32) -> Section {
        Section {
            id,
            section_number: self.section_number,
            current_temperature: self.current_temperature,
            minimum_temperature: self.minimum_temperature,
            current_capacity: self.current_capacity,
            minimum_capacity: self.minimum_capacity,
            maximum_capacity: self.maximum_capacity,
            warehouse_id: self.warehouse_id,
            product_type_id: self.product_type_id,
        }
    }
}

impl From<Section> for SectionRequest {
    fn from(value: Section) -> Self {
        Self {
            section_number: value.section_number,
            current_temperature: value.current_temperature,
            minimum_temperature: value.minimum_temperature,
            current_capacity: value.current_capacity,
            minimum_capacity: value.minimum_capacity,
            maximum_capacity: value.maximum_capacity,
            warehouse_id: value.warehouse_id,
            product_type_id: value.product_type_id,
        }
    }
}
