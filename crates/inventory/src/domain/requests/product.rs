use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const PRODUCT_FIELDS: &[&str] = &[
    "description",
    "expiration_rate",
    "freezing_rate",
    "height",
    "length",
    "netweight",
    "product_code",
    "recommended_freezing_temperature",
    "width",
    "product_type_id",
];

const VALIDATION_ORDER: &[&str] = &[
    "description",
    "expiration_rate",
    "freezing_rate",
    "height",
    "length",
    "netweight",
    "product_code",
    "recommended_freezing_temperature",
    "width",
    "product_type_id",
    "seller_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: String,
    #[validate(range(
        exclusive_min = 0.0,
        max = 100.0,
        message = "expiration_rate must be greater than 0 and at most 100"
    ))]
    pub expiration_rate: f64,
    #[validate(range(
        exclusive_min = 0.0,
        max = 100.0,
        message = "freezing_rate must be greater than 0 and at most 100"
    ))]
    pub freezing_rate: f64,
    #[validate(range(exclusive_min = 0.0, message = "height must be greater than 0"))]
    pub height: f64,
    #[validate(range(exclusive_min = 0.0, message = "length must be greater than 0"))]
    pub length: f64,
    #[validate(range(exclusive_min = 0.0, message = "netweight must be greater than 0"))]
    pub netweight: f64,
    #[validate(length(
        min = 1,
        max = 100,
        message = "product_code must be between 1 and 100 characters"
    ))]
    pub product_code: String,
    #[validate(range(
        exclusive_min = 0.0,
        max = 100.0,
        message = "recommended_freezing_temperature must be greater than 0 and at most 100"
    ))]
    pub recommended_freezing_temperature: f64,
    #[validate(range(exclusive_min = 0.0, message = "width must be greater than 0"))]
    pub width: f64,
    #[validate(range(min = 1, message = "product_type_id must be greater than 0"))]
    pub product_type_id: i32,
    #[serde(default)]
    #[validate(range(min = 1, message = "seller_id must be greater than 0"))]
    pub seller_id: Option<i32>,
}

impl ProductRequest {
    pub fn validation_order() -> &'static [&'static str] {
        VALIDATION_ORDER
    }

    pub fn into_model(self, id: i32) -> Product {
        Product {
            id,
            description: self.description,
            expiration_rate: self.expiration_rate,
            freezing_rate: self.freezing_rate,
            height: self.height,
            length: self.length,
            netweight: self.netweight,
            product_code: self.product_code,
            recommended_freezing_temperature: self.recommended_freezing_temperature,
            width: self.width,
            product_type_id: self.product_type_id,
            seller_id: self.seller_id,
        }
    }
}

impl From<Product> for ProductRequest {
    fn from(value: Product) -> Self {
        Self {
            description: value.description,
            expiration_rate: value.expiration_rate,
            freezing_rate: value.freezing_rate,
            height: value.height,
            length: value.length,
            netweight: value.netweight,
            product_code: value.product_code,
            recommended_freezing_temperature: value.recommended_freezing_temperature,
            width: value.width,
            product_type_id: value.product_type_id,
            seller_id: value.seller_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::first_violation;

    fn valid() -> ProductRequest {
        ProductRequest {
            description: "Yogurt".into(),
            expiration_rate: 1.5,
            freezing_rate: 2.0,
            height: 10.0,
            length: 5.0,
            netweight: 0.5,
            product_code: "YOG-1".into(),
            recommended_freezing_temperature: 4.0,
            width: 3.0,
            product_type_id: 1,
            seller_id: None,
        }
    }

    #[test]
    fn accepts_rates_up_to_one_hundred() {
        let mut request = valid();
        request.expiration_rate = 100.0;
        assert!(first_violation(&request, ProductRequest::validation_order()).is_ok());
    }

    #[test]
    fn rejects_zero_rate_and_long_codes() {
        let mut request = valid();
        request.freezing_rate = 0.0;
        assert_eq!(
            first_violation(&request, ProductRequest::validation_order()).unwrap_err(),
            "freezing_rate must be greater than 0 and at most 100"
        );

        let mut request = valid();
        request.product_code = "x".repeat(101);
        assert_eq!(
            first_violation(&request, ProductRequest::validation_order()).unwrap_err(),
            "product_code must be between 1 and 100 characters"
        );
    }
}
