use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::utils::whole_float;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductBatch {
    pub id: i32,
    pub batch_number: i32,
    pub current_quantity: i32,
    #[serde(serialize_with = "whole_float")]
    pub current_temperature: f64,
    pub due_date: NaiveDate,
    pub initial_quantity: i32,
    pub manufacturing_date: NaiveDate,
    pub manufacturing_hour: i32,
    #[serde(serialize_with = "whole_float")]
    pub minimum_temperature: f64,
    pub product_id: i32,
    pub section_id: i32,
}
