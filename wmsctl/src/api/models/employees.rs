//! API request/response models for employees.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{RequestBody, first_missing};
use crate::db::models::employees::Employee;
use crate::types::{EmployeeId, WarehouseId};

/// Request body for creating or patching an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EmployeeRequest {
    /// Must be absent or zero on create; ignored on update
    pub id: EmployeeId,
    /// Badge number (must be unique)
    #[schema(example = 1234)]
    pub card_number_id: i64,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = 1)]
    pub warehouse_id: WarehouseId,
}

impl RequestBody for EmployeeRequest {
    const REQUIRED_KEYS: &'static [&'static str] = &["card_number_id", "first_name", "last_name", "warehouse_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn missing_field(&self) -> Option<&'static str> {
        first_missing([
            ("card_number_id", self.card_number_id <= 0),
            ("first_name", self.first_name.is_empty()),
            ("last_name", self.last_name.is_empty()),
            ("warehouse_id", self.warehouse_id <= 0),
        ])
    }
}

/// An employee as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: EmployeeId,
    pub card_number_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: WarehouseId,
}

impl From<EmployeeRequest> for Employee {
    fn from(request: EmployeeRequest) -> Self {
        Self {
            id: request.id,
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
            warehouse_id: request.warehouse_id,
        }
    }
}

impl From<Employee> for EmployeeRequest {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            card_number_id: employee.card_number_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            warehouse_id: employee.warehouse_id,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            card_number_id: employee.card_number_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            warehouse_id: employee.warehouse_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_order() {
        let mut request = EmployeeRequest::default();
        assert_eq!(request.missing_field(), Some("card_number_id"));

        request.card_number_id = 1234;
        request.first_name = "John".to_string();
        assert_eq!(request.missing_field(), Some("last_name"));

        request.last_name = "Doe".to_string();
        assert_eq!(request.missing_field(), Some("warehouse_id"));

        request.warehouse_id = 1;
        assert_eq!(request.missing_field(), None);
    }

    #[test]
    fn test_absent_keys_decode_to_zero_values() {
        let request: EmployeeRequest = serde_json::from_str(r#"{"first_name": "John"}"#).unwrap();
        assert_eq!(request.id, 0);
        assert_eq!(request.card_number_id, 0);
        assert_eq!(request.last_name, "");
    }
}
