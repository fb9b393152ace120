//! API request/response models for warehouse sections.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RequestBody, first_missing};
use crate::db::models::sections::Section;
use crate::types::{ProductTypeId, SectionId, WarehouseId};

/// Request body for creating or patching a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SectionRequest {
    pub id: SectionId,
    /// Unique section number
    #[schema(example = 12)]
    pub section_number: i32,
    pub current_temperature: f64,
    /// Not below -30 °C
    #[schema(example = -20.0)]
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: WarehouseId,
    pub product_type_id: ProductTypeId,
}

impl RequestBody for SectionRequest {
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "section_number",
        "current_temperature",
        "minimum_temperature",
        "current_capacity",
        "minimum_capacity",
        "maximum_capacity",
        "warehouse_id",
        "product_type_id",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn missing_field(&self) -> Option<&'static str> {
        first_missing([
            ("section_number", self.section_number == 0),
            ("minimum_capacity", self.minimum_capacity < 0),
            ("maximum_capacity", self.maximum_capacity < 0),
            ("warehouse_id", self.warehouse_id <= 0),
            ("product_type_id", self.product_type_id <= 0),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionResponse {
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

impl From<SectionRequest> for Section {
    fn from(request: SectionRequest) -> Self {
        Self {
            id: request.id,
            section_number: request.section_number,
            current_temperature: request.current_temperature,
            minimum_temperature: request.minimum_temperature,
            current_capacity: request.current_capacity,
            minimum_capacity: request.minimum_capacity,
            maximum_capacity: request.maximum_capacity,
            warehouse_id: request.warehouse_id,
            product_type_id: request.product_type_id,
        }
    }
}

impl From<Section> for SectionRequest {
    fn from(section: Section) -> Self {
        Self {
            id: section.id,
            section_number: section.section_number,
            current_temperature: section.current_temperature,
            minimum_temperature: section.minimum_temperature,
            current_capacity: section.current_capacity,
            minimum_capacity: section.minimum_capacity,
            maximum_capacity: section.maximum_capacity,
            warehouse_id: section.warehouse_id,
            product_type_id: section.product_type_id,
        }
    }
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            id: section.id,
            section_number: section.section_number,
            current_temperature: section.current_temperature,
            minimum_temperature: section.minimum_temperature,
            current_capacity: section.current_capacity,
            minimum_capacity: section.minimum_capacity,
            maximum_capacity: section.maximum_capacity,
            warehouse_id: section.warehouse_id,
            product_type_id: section.product_type_id,
        }
    }
}
