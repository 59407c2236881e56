use crate::model::Locality;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const LOCALITY_FIELDS: &[&str] = &[
    "locality_name",
    "province_name",
    "country_name",
    "postal_code",
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LocalityRequest {
    #[validate(length(min = 1, message = "locality_name cannot be empty"))]
    pub locality_name: String,
    #[validate(length(min = 1, message = "province_name cannot be empty"))]
    pub province_name: String,
    #[validate(length(min = 1, message = "country_name cannot be empty"))]
    pub country_name: String,
    #[validate(range(min = 1, message = "postal_code must be a positive integer"))]
    pub postal_code: i32,
}

impl LocalityRequest {
    pub fn into_model(self, id: i32) -> Locality {
        Locality {
            id,
            locality_name: self.locality_name,
            province_name: self.province_name,
            country_name: self.country_name,
            postal_code: self.postal_code,
        }
    }
}

impl From<Locality> for LocalityRequest {
    fn from(value: Locality) -> Self {
        Self {
            locality_name: value.locality_name,
            province_name: value.province_name,
            country_name: value.country_name,
            postal_code: value.postal_code,
        }
    }
}
