use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::utils::whole_float;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Price snapshot of a product at a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductRecord {
    pub id: i32,
    pub last_update_date: NaiveDate,
    #[serde(serialize_with = "whole_float")]
    pub purchase_price: f64,
    #[serde(serialize_with = "whole_float")]
    pub sale_price: f64,
    pub product_id: i32,
}
