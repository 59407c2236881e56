use serde::{Deserialize, Serialize};
use shared::utils::whole_float;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Warehouse {
    pub id: i32,
    pub address: String,
    pub telephone: String,
    pub warehouse_code: String,
    pub minimum_capacity: i32,
    #[serde(serialize_with = "whole_float")]
    pub minimum_temperature: f64,
    pub locality_id: Option<i32>,
}
