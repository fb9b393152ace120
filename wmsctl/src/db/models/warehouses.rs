use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::models::impl_entity;
use crate::types::WarehouseId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: String,
}

impl_entity!(Warehouse, "warehouse");
