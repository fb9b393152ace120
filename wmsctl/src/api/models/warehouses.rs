//! API request/response models for warehouses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RequestBody, first_missing};
use crate::db::models::warehouses::Warehouse;
use crate::types::WarehouseId;

/// Request body for creating or patching a warehouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WarehouseRequest {
    pub id: WarehouseId,
    /// Unique warehouse code
    #[schema(example = "WH-1")]
    pub warehouse_code: String,
    pub address: String,
    #[schema(example = "5551234567")]
    pub telephone: String,
    pub minimum_capacity: i32,
    /// Degrees Celsius
    pub minimum_temperature: f64,
    pub locality_id: String,
}

impl RequestBody for WarehouseRequest {
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "warehouse_code",
        "address",
        "telephone",
        "minimum_capacity",
        "minimum_temperature",
        "locality_id",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn missing_field(&self) -> Option<&'static str> {
        first_missing([
            ("warehouse_code", self.warehouse_code.is_empty()),
            ("address", self.address.is_empty()),
            ("telephone", self.telephone.is_empty()),
            ("minimum_capacity", self.minimum_capacity == 0),
            ("locality_id", self.locality_id.is_empty()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WarehouseResponse {
    pub id: WarehouseId,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    pub locality_id: String,
}

impl From<WarehouseRequest> for Warehouse {
    fn from(request: WarehouseRequest) -> Self {
        Self {
            id: request.id,
            warehouse_code: request.warehouse_code,
            address: request.address,
            telephone: request.telephone,
            minimum_capacity: request.minimum_capacity,
            minimum_temperature: request.minimum_temperature,
            locality_id: request.locality_id,
        }
    }
}

impl From<Warehouse> for WarehouseRequest {
    fn from(warehouse: Warehouse) -> Self {
        Self {
            id: warehouse.id,
            warehouse_code: warehouse.warehouse_code,
            address: warehouse.address,
            telephone: warehouse.telephone,
            minimum_capacity: warehouse.minimum_capacity,
            minimum_temperature: warehouse.minimum_temperature,
            locality_id: warehouse.locality_id,
        }
    }
}

impl From<Warehouse> for WarehouseResponse {
    fn from(warehouse: Warehouse) -> Self {
        Self {
            id: warehouse.id,
            warehouse_code: warehouse.warehouse_code,
            address: warehouse.address,
            telephone: warehouse.telephone,
            minimum_capacity: warehouse.minimum_capacity,
            minimum_temperature: warehouse.minimum_temperature,
            locality_id: warehouse.locality_id,
        }
    }
}
