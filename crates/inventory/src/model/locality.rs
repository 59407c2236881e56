use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Locality {
    pub id: i32,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
    pub postal_code: i32,
}
