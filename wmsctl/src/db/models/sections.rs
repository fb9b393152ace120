use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::models::impl_entity;
use crate::types::{ProductTypeId, SectionId, WarehouseId};

/// A temperature-controlled area of a warehouse holding one product type.
///
/// Temperatures are in degrees Celsius, capacities in product batches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Section {
    pub id: SectionId,
    pub section_number: i32,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: WarehouseId,
    pub product_type_id: ProductTypeId,
}

impl_entity!(Section, "section");
