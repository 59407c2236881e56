use serde::{Deserialize, Serialize};
use shared::utils::whole_float;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub description: String,
    #[serde(serialize_with = "whole_float")]
    pub expiration_rate: f64,
    #[serde(serialize_with = "whole_float")]
    pub freezing_rate: f64,
    #[serde(serialize_with = "whole_float")]
    pub height: f64,
    #[serde(serialize_with = "whole_float")]
    pub length: f64,
    #[serde(serialize_with = "whole_float")]
    pub netweight: f64,
    pub product_code: String,
    #[serde(serialize_with = "whole_float")]
    pub recommended_freezing_temperature: f64,
    #[serde(serialize_with = "whole_float")]
    pub width: f64,
    pub product_type_id: i32,
    pub seller_id: Option<i32>,
}
