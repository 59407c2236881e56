use serde::{Deserialize, Serialize};
use shared::utils::whole_float;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Section {
    pub id: i32,
    pub section_number: i32,
    #[serde(serialize_with = "whole_float")]
    pub current_temperature: f64,
    #[serde(serialize_with = "whole_float")]
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}
