use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::models::impl_entity;
use crate::types::{EmployeeId, WarehouseId};

/// A member of the warehouse staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: EmployeeId,
    /// Badge number; unique across employees
    pub card_number_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: WarehouseId,
}

impl_entity!(Employee, "employee");
