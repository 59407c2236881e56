use crate::model::ProductRecord;
use serde::{Deserialize, Serialize};
use shared::utils::{format_date, parse_date, validate_date};
use utoipa::ToSchema;
use validator::Validate;

pub const PRODUCT_RECORD_FIELDS: &[&str] = &[
    "last_update_date",
    "purchase_price",
    "sale_price",
    "product_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductRecordRequest {
    #[validate(custom(
        function = "validate_date",
        message = "last_update_date must be in format YYYY-MM-DD"
    ))]
    pub last_update_date: String,
    #[validate(range(exclusive_min = 0.0, message = "purchase_price must be greater than 0"))]
    pub purchase_price: f64,
    #[validate(range(exclusive_min = 0.0, message = "sale_price must be greater than 0"))]
    pub sale_price: f64,
    #[validate(range(min = 1, message = "product_id must be greater than 0"))]
    pub product_id: i32,
}

impl ProductRecordRequest {
    pub fn into_model(self, id: i32) -> Result<ProductRecord, String> {
        let last_update_date = parse_date(&self.last_update_date)
            .ok_or_else(|| "last_update_date must be in format YYYY-MM-DD".to_string())?;

        Ok(ProductRecord {
            id,
            last_update_date,
            purchase_price: self.purchase_price,
            sale_price: self.sale_price,
            product_id: self.product_id,
        })
    }
}

impl From<ProductRecord> for ProductRecordRequest {
    fn from(value: ProductRecord) -> Self {
        Self {
            last_update_date: format_date(value.last_update_date),
            purchase_price: value.purchase_price,
            sale_price: value.sale_price,
            product_id: value.product_id,
        }
    }
}
