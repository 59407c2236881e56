use crate::model::Carry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const CARRY_FIELDS: &[&str] = &[
    "cid",
    "company_name",
    "address",
    "telephone",
    "locality_id",
];

pub const INVALID_LOCALITY_ID: &str = "locality_id must be a positive integer";

/// Carriers send `locality_id` as a string; it is converted once validated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CarryRequest {
    #[validate(length(min = 1, message = "cid cannot be empty"))]
    pub cid: String,
    #[validate(length(min = 1, message = "company_name cannot be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "address cannot be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "telephone cannot be empty"))]
    pub telephone: String,
    #[validate(custom(
        function = "validate_locality_id",
        message = "locality_id must be a positive integer"
    ))]
    pub locality_id: String,
}

fn parse_locality_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

fn validate_locality_id(raw: &str) -> Result<(), ValidationError> {
    match parse_locality_id(raw) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("locality_id")),
    }
}

impl CarryRequest {
    pub fn into_model(self, id: i32) -> Result<Carry, String> {
        let locality_id =
            parse_locality_id(&self.locality_id).ok_or_else(|| INVALID_LOCALITY_ID.to_string())?;

        Ok(Carry {
            id,
            cid: self.cid,
            company_name: self.company_name,
            address: self.address,
            telephone: self.telephone,
            locality_id,
        })
    }
}

impl From<Carry> for CarryRequest {
    fn from(value: Carry) -> Self {
        Self {
            cid: value.cid,
            company_name: value.company_name,
            address: value.address,
            telephone: value.telephone,
            locality_id: value.locality_id.to_string(),
        }
    }
}
