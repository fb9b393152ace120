//! Service layer: field validation and error translation.
//!
//! A [`CrudService`] sits between the HTTP handlers and a [`Repository`]. It
//!
//! - validates entities with their [`Validate`] rules before `save` and `update`, so invalid
//!   input never reaches storage;
//! - runs every storage call under a deadline;
//! - translates [`DbError`](crate::db::errors::DbError) into [`ServiceError`].
//!
//! One generic service serves all six entities; the per-entity modules only contribute their
//! validation rules.

use std::{future::Future, sync::Arc, time::Duration};

use tracing::warn;

use crate::db::{self, handlers::Repository, models::Entity};
use crate::db::models::{
    buyers::Buyer, employees::Employee, products::Product, sections::Section, sellers::Seller, warehouses::Warehouse,
};

pub mod buyers;
pub mod employees;
pub mod errors;
pub mod products;
pub mod rules;
pub mod sections;
pub mod sellers;
pub mod warehouses;

pub use errors::{ForeignKeyConflict, Result, ServiceError};

pub type ProductService = CrudService<Product>;
pub type SellerService = CrudService<Seller>;
pub type BuyerService = CrudService<Buyer>;
pub type EmployeeService = CrudService<Employee>;
pub type WarehouseService = CrudService<Warehouse>;
pub type SectionService = CrudService<Section>;

/// Business rules an entity must satisfy before it is written
pub trait Validate {
    /// Check the rules in their declared order and return the first failure
    fn validate(&self) -> Result<()>;
}

/// Validation and error translation in front of one repository
pub struct CrudService<E: Entity> {
    repository: Arc<dyn Repository<Entity = E>>,
    deadline: Duration,
}

impl<E: Entity> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            deadline: self.deadline,
        }
    }
}

impl<E: Entity + Validate> CrudService<E> {
    pub fn new(repository: Arc<dyn Repository<Entity = E>>, deadline: Duration) -> Self {
        Self { repository, deadline }
    }

    pub async fn get_all(&self) -> Result<Vec<E>> {
        self.storage(self.repository.get_all()).await
    }

    pub async fn get(&self, id: i64) -> Result<E> {
        self.storage(self.repository.get(id)).await
    }

    /// Validate and insert; on success `entity` carries its new id
    pub async fn save(&self, entity: &mut E) -> Result<()> {
        entity.validate()?;
        self.storage(self.repository.save(entity)).await
    }

    /// Validate and replace every stored field of `entity`
    ///
    /// There is no version check: concurrent updates of the same entity race and the last write
    /// wins. An update that lands after a concurrent delete matches no row and still succeeds.
    pub async fn update(&self, entity: &E) -> Result<()> {
        entity.validate()?;
        self.storage(self.repository.update(entity)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage(self.repository.delete(id)).await
    }

    /// Run one repository call under the deadline and translate its error
    async fn storage<T>(&self, call: impl Future<Output = db::errors::Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.deadline, call).await {
            Ok(result) => result.map_err(|err| ServiceError::from_db(E::NAME, err)),
            Err(_) => {
                warn!(resource = E::NAME, deadline = %humantime::format_duration(self.deadline), "Storage call timed out");
                Err(ServiceError::Internal {
                    resource: E::NAME,
                    source: anyhow::anyhow!("storage call exceeded {}", humantime::format_duration(self.deadline)),
                })
            }
        }
    }
}
