use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Buyer {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}
