//! API request and response data models.
//!
//! These structures define the public JSON contract and are kept apart from the database models
//! in [`crate::db::models`], so the wire format can differ from storage (Product keys such as
//! `netweight` map to legacy column names).
//!
//! Every entity has a request body and a response body:
//!
//! - [`products`]: [`ProductRequest`](products::ProductRequest) / [`ProductResponse`](products::ProductResponse)
//! - [`sellers`]: [`SellerRequest`](sellers::SellerRequest) / [`SellerResponse`](sellers::SellerResponse)
//! - [`buyers`]: [`BuyerRequest`](buyers::BuyerRequest) / [`BuyerResponse`](buyers::BuyerResponse)
//! - [`employees`]: [`EmployeeRequest`](employees::EmployeeRequest) / [`EmployeeResponse`](employees::EmployeeResponse)
//! - [`warehouses`]: [`WarehouseRequest`](warehouses::WarehouseRequest) / [`WarehouseResponse`](warehouses::WarehouseResponse)
//! - [`sections`]: [`SectionRequest`](sections::SectionRequest) / [`SectionResponse`](sections::SectionResponse)
//!
//! Successful responses are wrapped in [`Envelope`], failures are rendered as [`ErrorBody`].
//!
//! # Request bodies
//!
//! Request structs use `#[serde(default)]`: a key the client leaves out decodes to its zero
//! value. Presence is checked separately against [`RequestBody::REQUIRED_KEYS`] before decoding,
//! and zero values are rejected by [`RequestBody::missing_field`] after it.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use utoipa::ToSchema;

pub mod buyers;
pub mod employees;
pub mod products;
pub mod sections;
pub mod sellers;
pub mod warehouses;

/// Success envelope: `{"message": "success", "data": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success".to_string(),
            data,
        }
    }
}

/// Error envelope returned for every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable reason
    #[schema(example = "employee not found")]
    pub message: String,
    /// Lowercase canonical HTTP reason phrase
    #[schema(example = "not found")]
    pub status: String,
}

/// A JSON body accepted by a create or update endpoint.
pub trait RequestBody: Serialize + DeserializeOwned {
    /// Keys that must be present in a create body, in the order they are checked
    const REQUIRED_KEYS: &'static [&'static str];

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// First key, in declared order, whose value is the zero value for its type
    fn missing_field(&self) -> Option<&'static str>;
}

/// Returns the first key flagged as missing
pub(crate) fn first_missing<const N: usize>(checks: [(&'static str, bool); N]) -> Option<&'static str> {
    checks.into_iter().find(|(_, missing)| *missing).map(|(key, _)| key)
}
