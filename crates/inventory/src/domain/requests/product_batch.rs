use crate::model::ProductBatch;
use serde::{Deserialize, Serialize};
use shared::utils::{format_date, parse_date, validate_date};
use utoipa::ToSchema;
use validator::Validate;

pub const PRODUCT_BATCH_FIELDS: &[&str] = &[
    "batch_number",
    "current_quantity",
    "current_temperature",
    "due_date",
    "initial_quantity",
    "manufacturing_date",
    "manufacturing_hour",
    "minimum_temperature",
    "product_id",
    "section_id",
];

pub const DUE_DATE_FORMAT: &str = "due_date must be in format YYYY-MM-DD";
pub const MANUFACTURING_DATE_FORMAT: &str = "manufacturing_date must be in format YYYY-MM-DD";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductBatchRequest {
    #[validate(range(min = 1, message = "batch_number must be greater than 0"))]
    pub batch_number: i32,
    #[validate(range(min = 0, message = "current_quantity cannot be negative"))]
    pub current_quantity: i32,
    pub current_temperature: f64,
    #[validate(custom(
        function = "validate_date",
        message = "due_date must be in format YYYY-MM-DD"
    ))]
    pub due_date: String,
    #[validate(range(min = 0, message = "initial_quantity cannot be negative"))]
    pub initial_quantity: i32,
    #[validate(custom(
        function = "validate_date",
        message = "manufacturing_date must be in format YYYY-MM-DD"
    ))]
    pub manufacturing_date: String,
    #[validate(range(min = 0, max = 23, message = "manufacturing_hour must be between 0 and 23"))]
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    #[validate(range(min = 1, message = "product_id must be greater than 0"))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "section_id must be greater than 0"))]
    pub section_id: i32,
}

impl ProductBatchRequest {
    pub fn into_model(self, id: i32) -> Result<ProductBatch, String> {
        let due_date = parse_date(&self.due_date).ok_or_else(|| DUE_DATE_FORMAT.to_string())?;
        let manufacturing_date = parse_date(&self.manufacturing_date)
            .ok_or_else(|| MANUFACTURING_DATE_FORMAT.to_string())?;

        Ok(ProductBatch {
            id,
            batch_number: self.batch_number,
            current_quantity: self.current_quantity,
            current_temperature: self.current_temperature,
            due_date,
            initial_quantity: self.initial_quantity,
            manufacturing_date,
            manufacturing_hour: self.manufacturing_hour,
            minimum_temperature: self.minimum_temperature,
            product_id: self.product_id,
            section_id: self.section_id,
        })
    }
}

impl From<ProductBatch> for ProductBatchRequest {
    fn from(value: ProductBatch) -> Self {
        Self {
            batch_number: value.batch_number,
            current_quantity: value.current_quantity,
            current_temperature: value.current_temperature,
            due_date: format_date(value.due_date),
            initial_quantity: value.initial_quantity,
            manufacturing_date: format_date(value.manufacturing_date),
            manufacturing_hour: value.manufacturing_hour,
            minimum_temperature: value.minimum_temperature,
            product_id: value.product_id,
            section_id: value.section_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::first_violation;

    fn valid() -> ProductBatchRequest {
        ProductBatchRequest {
            batch_number: 1,
            current_quantity: 1,
            current_temperature: 1.0,
            due_date: "2023-11-10".into(),
            initial_quantity: 1,
            manufacturing_date: "2023-11-10".into(),
            manufacturing_hour: 1,
            minimum_temperature: 1.0,
            product_id: 1,
            section_id: 1,
        }
    }

    #[test]
    fn hour_must_fit_in_a_day() {
        let mut request = valid();
        request.manufacturing_hour = 23;
        assert!(first_violation(&request, PRODUCT_BATCH_FIELDS).is_ok());

        request.manufacturing_hour = 24;
        assert_eq!(
            first_violation(&request, PRODUCT_BATCH_FIELDS).unwrap_err(),
            "manufacturing_hour must be between 0 and 23"
        );
    }

    #[test]
    fn dates_round_trip_through_the_model() {
        let batch = valid().into_model(9).unwrap();
        let back = ProductBatchRequest::from(batch);
        assert_eq!(back.due_date, "2023-11-10");
        assert_eq!(back.manufacturing_date, "2023-11-10");
    }

    #[test]
    fn slash_dates_are_rejected() {
        let mut request = valid();
        request.due_date = "2023/11/10".into();
        assert_eq!(
            first_violation(&request, PRODUCT_BATCH_FIELDS).unwrap_err(),
            DUE_DATE_FORMAT
        );
        assert_eq!(request.into_model(1).unwrap_err(), DUE_DATE_FORMAT);
    }
}
