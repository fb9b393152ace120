//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with MySQL. It follows the Repository
//! pattern so the service layer never sees SQL or driver errors.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Services   │  (validation + error translation)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - one table each)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │    MySQL    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository trait and its MySQL implementations
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Repository error type
//!
//! ## Example Usage
//!
//! ```ignore
//! use wmsctl::db::handlers::{Employees, Repository};
//!
//! async fn example(pool: sqlx::MySqlPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let employees = Employees::new(pool);
//!
//!     for employee in employees.get_all().await? {
//!         println!("{} {}", employee.first_name, employee.last_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Migrations
//!
//! Migrations live in the `migrations/` directory and are embedded into the binary. The
//! [`crate::migrator`] function provides access to the migrator:
//!
//! ```ignore
//! wmsctl::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
