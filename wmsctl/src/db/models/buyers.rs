use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::models::impl_entity;
use crate::types::BuyerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Buyer {
    pub id: BuyerId,
    pub card_number_id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl_entity!(Buyer, "buyer");
