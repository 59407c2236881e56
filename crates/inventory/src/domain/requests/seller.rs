use crate::model::Seller;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const SELLER_FIELDS: &[&str] = &[
    "cid",
    "company_name",
    "address",
    "telephone",
    "locality_id",
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SellerRequest {
    #[validate(range(min = 1, message = "cid must be greater than 0"))]
    pub cid: i32,
    #[validate(length(min = 1, message = "company_name cannot be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "address cannot be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "telephone cannot be empty"))]
    pub telephone: String,
    #[validate(range(min = 1, message = "locality_id must be greater than 0"))]
    pub locality_id: i32,
}

impl SellerRequest {
    pub fn into_model(self, id: i32) -> Seller {
        Seller {
            id,
            cid: self.cid,
            company_name: self.company_name,
            address: self.address,
            telephone: self.telephone,
            locality_id: self.locality_id,
        }
    }
}

impl From<Seller> for SellerRequest {
    fn from(value: Seller) -> Self {
        Self {
            cid: value.cid,
            company_name: value.company_name,
            address: value.address,
            telephone: value.telephone,
            locality_id: value.locality_id,
        }
    }
}
