//! Base repository trait for database operations.

use crate::db::{errors::Result, models::Entity};

/// Base repository trait providing the CRUD operations every table supports.
///
/// A repository is the data access layer for one table. Implementations hold a cloned pool
/// handle, so they are cheap to share behind an `Arc<dyn Repository<Entity = ..>>` and can be
/// swapped for in-memory fakes in tests.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    /// The record type stored in the table
    type Entity: Entity;

    /// List every entity, ordered by id
    async fn get_all(&self) -> Result<Vec<Self::Entity>>;

    /// Get an entity by ID, failing with `NotFound` when absent
    async fn get(&self, id: i64) -> Result<Self::Entity>;

    /// Insert a new entity and write the generated ID back into it
    async fn save(&self, entity: &mut Self::Entity) -> Result<()>;

    /// Replace every stored field of the entity with the same ID
    async fn update(&self, entity: &Self::Entity) -> Result<()>;

    /// Delete an entity by ID, failing with `NotFound` when no row was affected
    async fn delete(&self, id: i64) -> Result<()>;
}
