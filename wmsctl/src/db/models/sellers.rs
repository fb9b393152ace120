use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::models::impl_entity;
use crate::types::SellerId;

/// A company selling products through the warehouses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Seller {
    pub id: SellerId,
    /// Company identification number; unique across sellers
    pub cid: i64,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: String,
}

impl_entity!(Seller, "seller");
