//! Repository implementations for database access.
//!
//! Each repository wraps a cloned [`sqlx::MySqlPool`], owns the SQL for exactly one table and
//! implements the [`Repository`] trait. Every operation is a single round trip to the database:
//! no retries and no transactions spanning tables.
//!
//! # Available Repositories
//!
//! - [`Products`]: `products` table
//! - [`Sellers`]: `sellers` table
//! - [`Buyers`]: `buyers` table
//! - [`Employees`]: `employees` table
//! - [`Warehouses`]: `warehouses` table
//! - [`Sections`]: `sections` table

use anyhow::Context;
use sqlx::mysql::MySqlQueryResult;

use crate::db::errors::Result;

pub mod buyers;
pub mod employees;
pub mod products;
pub mod repository;
pub mod sections;
pub mod sellers;
pub mod warehouses;

pub use buyers::Buyers;
pub use employees::Employees;
pub use products::Products;
pub use repository::Repository;
pub use sections::Sections;
pub use sellers::Sellers;
pub use warehouses::Warehouses;

/// Id generated by the `AUTO_INCREMENT` column for the row just inserted
pub(crate) fn inserted_id(result: &MySqlQueryResult) -> Result<i64> {
    let id = i64::try_from(result.last_insert_id()).context("generated id does not fit in a BIGINT")?;
    Ok(id)
}
