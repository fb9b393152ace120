//! Database record models matching table schemas.
//!
//! Each struct corresponds to one table row and derives `sqlx::FromRow`. Database models are
//! distinct from the API models in [`crate::api::models`] so storage column names can differ from
//! the JSON keys clients send (see [`products::Product`]).
//!
//! - [`products`]: Products offered by sellers
//! - [`sellers`]: Companies selling products
//! - [`buyers`]: Customers placing purchase orders
//! - [`employees`]: Warehouse staff
//! - [`warehouses`]: Physical warehouses
//! - [`sections`]: Temperature-controlled areas inside a warehouse

pub mod buyers;
pub mod employees;
pub mod products;
pub mod sections;
pub mod sellers;
pub mod warehouses;

/// A flat record stored in one table and keyed by a storage-assigned id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Singular lowercase name, used in log fields and user-facing messages
    const NAME: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}

/// Implements [`Entity`] for a record whose key lives in an `id` field.
macro_rules! impl_entity {
    ($record:ty, $name:literal) => {
        impl $crate::db::models::Entity for $record {
            const NAME: &'static str = $name;

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }
        }
    };
}

pub(crate) use impl_entity;
