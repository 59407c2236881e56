use crate::model::Buyer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const BUYER_FIELDS: &[&str] = &["card_number_id", "first_name", "last_name"];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BuyerRequest {
    #[validate(length(min = 1, message = "card_number_id cannot be empty"))]
    pub card_number_id: String,
    #[validate(length(min = 1, message = "first_name cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name cannot be empty"))]
    pub last_name: String,
}

impl BuyerRequest {
    pub fn into_model(self, id: i32) -> Buyer {
        Buyer {
            id,
            card_number_id: self.card_number_id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

impl From<Buyer> for BuyerRequest {
    fn from(value: Buyer) -> Self {
        Self {
            card_number_id: value.card_number_id,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}
