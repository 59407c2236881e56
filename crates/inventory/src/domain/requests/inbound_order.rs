use crate::model::InboundOrder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const INBOUND_ORDER_FIELDS: &[&str] = &[
    "order_number",
    "employee_id",
    "product_batch_id",
    "warehouse_id",
];

/// `order_date` is stamped by the server and never read from the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InboundOrderRequest {
    #[validate(length(min = 1, message = "order_number cannot be empty"))]
    pub order_number: String,
    #[validate(range(min = 1, message = "employee_id must be greater than 0"))]
    pub employee_id: i32,
    #[validate(range(min = 1, message = "product_batch_id must be greater than 0"))]
    pub product_batch_id: i32,
    #[validate(range(min = 1, message = "warehouse_id must be greater than 0"))]
    pub warehouse_id: i32,
}

impl InboundOrderRequest {
    pub fn into_model(self, id: i32, order_date: NaiveDate) -> InboundOrder {
        InboundOrder {
            id,
            order_date,
            order_number: self.order_number,
            employee_id: self.employee_id,
            product_batch_id: self.product_batch_id,
            warehouse_id: self.warehouse_id,
        }
    }
}

impl From<InboundOrder> for InboundOrderRequest {
    fn from(value: InboundOrder) -> Self {
        Self {
            order_number: value.order_number,
            employee_id: value.employee_id,
            product_batch_id: value.product_batch_id,
            warehouse_id: value.warehouse_id,
        }
    }
}
