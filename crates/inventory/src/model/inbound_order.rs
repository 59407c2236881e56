use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InboundOrder {
    pub id: i32,
    pub order_date: NaiveDate,
    pub order_number: String,
    pub employee_id: i32,
    pub product_batch_id: i32,
    pub warehouse_id: i32,
}
