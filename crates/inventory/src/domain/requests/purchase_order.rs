use crate::model::PurchaseOrder;
use serde::{Deserialize, Serialize};
use shared::utils::{format_date, parse_date, validate_date};
use utoipa::ToSchema;
use validator::Validate;

pub const PURCHASE_ORDER_FIELDS: &[&str] = &[
    "order_number",
    "order_date",
    "tracking_code",
    "buyer_id",
    "product_record_id",
    "order_status_id",
];

pub const ORDER_DATE_FORMAT: &str = "order_date must be in format YYYY-MM-DD";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PurchaseOrderRequest {
    #[validate(length(min = 1, message = "order_number cannot be empty"))]
    pub order_number: String,
    #[validate(custom(
        function = "validate_date",
        message = "order_date must be in format YYYY-MM-DD"
    ))]
    pub order_date: String,
    #[validate(length(min = 1, message = "tracking_code cannot be empty"))]
    pub tracking_code: String,
    #[validate(range(min = 1, message = "buyer_id must be greater than 0"))]
    pub buyer_id: i32,
    #[validate(range(min = 1, message = "product_record_id must be greater than 0"))]
    pub product_record_id: i32,
    #[validate(range(min = 1, message = "order_status_id must be greater than 0"))]
    pub order_status_id: i32,
}

impl PurchaseOrderRequest {
    pub fn into_model(self, id: i32) -> Result<PurchaseOrder, String> {
        let order_date =
            parse_date(&self.order_date).ok_or_else(|| ORDER_DATE_FORMAT.to_string())?;

        Ok(PurchaseOrder {
            id,
            order_number: self.order_number,
            order_date,
            tracking_code: self.tracking_code,
            buyer_id: self.buyer_id,
            product_record_id: self.product_record_id,
            order_status_id: self.order_status_id,
        })
    }
}

impl From<PurchaseOrder> for PurchaseOrderRequest {
    fn from(value: PurchaseOrder) -> Self {
        Self {
            order_number: value.order_number,
            order_date: format_date(value.order_date),
            tracking_code: value.tracking_code,
            buyer_id: value.buyer_id,
            product_record_id: value.product_record_id,
            order_status_id: value.order_status_id,
        }
    }
}
