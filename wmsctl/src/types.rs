//! Common type definitions.
//!
//! Every entity is keyed by a storage-assigned `BIGINT AUTO_INCREMENT` id. The aliases below keep
//! signatures readable; a value of `0` means the entity has not been persisted yet.

pub type ProductId = i64;
pub type SellerId = i64;
pub type BuyerId = i64;
pub type EmployeeId = i64;
pub type WarehouseId = i64;
pub type SectionId = i64;
pub type ProductTypeId = i64;

/// Id carried by an entity that has not been saved yet
pub const UNSAVED_ID: i64 = 0;
