//! HTTP request handlers for all API endpoints.
//!
//! One module per entity, each with the same five handlers. The request pipeline they share
//! lives here:
//!
//! 1. [`decode_create`] reads the body, checks key presence against
//!    [`RequestBody::REQUIRED_KEYS`], decodes the typed request, rejects a client-supplied id and
//!    runs the zero-value checks.
//! 2. [`overlay_update`] merges a PATCH body over the stored entity, so keys the client leaves
//!    out keep their previous values, then forces the id from the path.
//!
//! Every failure here is an [`Error::BadRequest`]; service and storage errors are mapped by
//! [`crate::errors::Error`].
//!
//! # Handler Modules
//!
//! - [`products`]
//! - [`sellers`]
//! - [`buyers`]
//! - [`employees`]
//! - [`warehouses`]
//! - [`sections`]

use anyhow::Context;
use axum::extract::rejection::BytesRejection;
use bytes::Bytes;
use serde_json::{Map, Value};

use crate::api::models::RequestBody;
use crate::errors::{Error, Result};
use crate::types::UNSAVED_ID;

pub mod buyers;
pub mod employees;
pub mod products;
pub mod sections;
pub mod sellers;
pub mod warehouses;

/// Body extractor that leaves read failures to the pipeline instead of axum's default rejection
pub type RawBody = std::result::Result<Bytes, BytesRejection>;

/// Parse an `{id}` path segment
pub(crate) fn parse_id(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| Error::bad_request("invalid id"))
}

fn read_object(body: RawBody) -> Result<Map<String, Value>> {
    let bytes = body.map_err(|_| Error::bad_request("invalid body: cannot read"))?;
    serde_json::from_slice(&bytes).map_err(|_| Error::bad_request("invalid body: cannot unmarshal to map"))
}

/// Decode the typed request; `null` values count as absent and decode to their zero value
fn into_request<T: RequestBody>(mut object: Map<String, Value>) -> Result<T> {
    object.retain(|_, value| !value.is_null());
    serde_json::from_value(Value::Object(object)).map_err(|_| Error::bad_request("invalid body: cannot unmarshal to struct"))
}

fn check_fields<T: RequestBody>(request: &T) -> Result<()> {
    match request.missing_field() {
        Some(field) => Err(Error::bad_request(format!("missing field: {field}"))),
        None => Ok(()),
    }
}

/// Decode and check a create body
pub(crate) fn decode_create<T: RequestBody>(body: RawBody) -> Result<T> {
    let object = read_object(body)?;

    if let Some(key) = T::REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
        return Err(Error::bad_request(format!("missing key: {key} not found")));
    }

    let request: T = into_request(object)?;
    if request.id() != UNSAVED_ID {
        return Err(Error::bad_request("id in request"));
    }
    check_fields(&request)?;
    Ok(request)
}

/// Merge a PATCH body over `current`, keeping the path id
pub(crate) fn overlay_update<T: RequestBody>(current: T, body: RawBody, id: i64) -> Result<T> {
    let mut patch = read_object(body)?;
    // A null in a PATCH leaves the stored value alone
    patch.retain(|_, value| !value.is_null());

    let Value::Object(mut merged) = serde_json::to_value(&current).context("serializing stored entity")? else {
        return Err(anyhow::anyhow!("stored entity did not serialize to an object").into());
    };
    merged.extend(patch);

    let mut request: T = into_request(merged)?;
    request.set_id(id);
    check_fields(&request)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::employees::EmployeeRequest;

    fn body(json: &str) -> RawBody {
        Ok(Bytes::from(json.to_string()))
    }

    fn message(err: Error) -> String {
        err.user_message()
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(message(parse_id("abc").unwrap_err()), "invalid id");
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_create_pipeline_messages_in_order() {
        let cases = [
            ("not json", "invalid body: cannot unmarshal to map"),
            ("[1, 2]", "invalid body: cannot unmarshal to map"),
            (r#"{"first_name": "John"}"#, "missing key: card_number_id not found"),
            (
                r#"{"card_number_id": "1234", "first_name": "John", "last_name": "Doe", "warehouse_id": 1}"#,
                "invalid body: cannot unmarshal to struct",
            ),
            (
                r#"{"id": 7, "card_number_id": 1234, "first_name": "John", "last_name": "Doe", "warehouse_id": 1}"#,
                "id in request",
            ),
            (
                r#"{"card_number_id": 1234, "first_name": "", "last_name": "Doe", "warehouse_id": 1}"#,
                "missing field: first_name",
            ),
        ];

        for (json, expected) in cases {
            let err = decode_create::<EmployeeRequest>(body(json)).unwrap_err();
            assert_eq!(message(err), expected, "body: {json}");
        }
    }

    #[test]
    fn test_decode_create_accepts_complete_body() {
        let request: EmployeeRequest =
            decode_create(body(r#"{"card_number_id": 1234, "first_name": "John", "last_name": "Doe", "warehouse_id": 1}"#)).unwrap();

        assert_eq!(request.card_number_id, 1234);
        assert_eq!(request.id, 0);
    }

    #[test]
    fn test_overlay_keeps_omitted_fields_and_path_id() {
        let current = EmployeeRequest {
            id: 3,
            card_number_id: 1234,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            warehouse_id: 1,
        };

        let merged = overlay_update(current, body(r#"{"id": 99, "last_name": "Smith"}"#), 3).unwrap();

        assert_eq!(merged.id, 3);
        assert_eq!(merged.first_name, "John");
        assert_eq!(merged.last_name, "Smith");
        assert_eq!(merged.card_number_id, 1234);
    }

    #[test]
    fn test_null_values_decode_as_zero() {
        let err = decode_create::<EmployeeRequest>(body(
            r#"{"card_number_id": 1234, "first_name": null, "last_name": "Doe", "warehouse_id": 1}"#,
        ))
        .unwrap_err();
        assert_eq!(message(err), "missing field: first_name");

        let request: EmployeeRequest = decode_create(body(
            r#"{"id": null, "card_number_id": 1234, "first_name": "John", "last_name": "Doe", "warehouse_id": 1}"#,
        ))
        .unwrap();
        assert_eq!(request.id, 0);
    }

    #[test]
    fn test_overlay_ignores_null_values() {
        let current = EmployeeRequest {
            id: 3,
            card_number_id: 1234,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            warehouse_id: 1,
        };

        let merged = overlay_update(current, body(r#"{"first_name": null, "last_name": "Smith"}"#), 3).unwrap();

        assert_eq!(merged.first_name, "John");
        assert_eq!(merged.last_name, "Smith");
    }

    #[test]
    fn test_overlay_rejects_zeroing_a_field() {
        let current = EmployeeRequest {
            id: 3,
            card_number_id: 1234,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            warehouse_id: 1,
        };

        let err = overlay_update(current, body(r#"{"warehouse_id": 0}"#), 3).unwrap_err();
        assert_eq!(message(err), "missing field: warehouse_id");
    }
}
