//! Test utilities: an in-memory repository and a router wired to it.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum_test::TestServer;

use crate::config::Config;
use crate::db::errors::{DbError, Result};
use crate::db::handlers::Repository;
use crate::db::models::{
    Entity, buyers::Buyer, employees::Employee, products::Product, sections::Section, sellers::Seller, warehouses::Warehouse,
};
use crate::service::CrudService;
use crate::{AppState, build_router};

struct Table<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
}

/// Repository backed by a map, with call counting, one-shot failure injection and an optional
/// artificial latency.
pub struct InMemoryRepository<E: Entity> {
    table: Mutex<Table<E>>,
    unique_key: Option<fn(&E) -> String>,
    failure: Mutex<Option<DbError>>,
    calls: AtomicUsize,
    latency: Option<Duration>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 0,
            }),
            unique_key: None,
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
            latency: None,
        }
    }

    /// Reject saves and updates whose key collides with another row, like a UNIQUE column
    pub fn with_unique_key(mut self, key: fn(&E) -> String) -> Self {
        self.unique_key = Some(key);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Insert rows directly, assigning ids in iteration order
    pub fn seed(&self, entities: impl IntoIterator<Item = E>) {
        let mut table = self.table.lock().unwrap();
        for mut entity in entities {
            table.next_id += 1;
            let id = table.next_id;
            entity.set_id(id);
            table.rows.insert(id, entity);
        }
    }

    /// Make the next repository call fail with `err`
    pub fn fail_next(&self, err: DbError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    /// Number of repository calls so far, failed ones included
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    async fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match self.failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check_unique(&self, table: &Table<E>, entity: &E) -> Result<()> {
        let Some(key) = self.unique_key else {
            return Ok(());
        };
        let wanted = key(entity);
        if table.rows.values().any(|row| row.id() != entity.id() && key(row) == wanted) {
            return Err(DbError::UniqueViolation {
                constraint: None,
                message: format!("Duplicate entry '{wanted}'"),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<E: Entity> Repository for InMemoryRepository<E> {
    type Entity = E;

    async fn get_all(&self) -> Result<Vec<E>> {
        self.enter().await?;
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<E> {
        self.enter().await?;
        self.table.lock().unwrap().rows.get(&id).cloned().ok_or(DbError::NotFound)
    }

    async fn save(&self, entity: &mut E) -> Result<()> {
        self.enter().await?;
        let mut table = self.table.lock().unwrap();
        self.check_unique(&table, entity)?;
        table.next_id += 1;
        let id = table.next_id;
        entity.set_id(id);
        table.rows.insert(id, entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<()> {
        self.enter().await?;
        let mut table = self.table.lock().unwrap();
        self.check_unique(&table, entity)?;
        // Like an UPDATE matching no row, a missing id is not an error
        if let Some(row) = table.rows.get_mut(&entity.id()) {
            *row = entity.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.enter().await?;
        self.table.lock().unwrap().rows.remove(&id).map(|_| ()).ok_or(DbError::NotFound)
    }
}

pub fn sample_employee(card_number_id: i64) -> Employee {
    Employee {
        id: 0,
        card_number_id,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        warehouse_id: 1,
    }
}

pub fn sample_buyer(card_number_id: i64) -> Buyer {
    Buyer {
        id: 0,
        card_number_id,
        first_name: "Maria".to_string(),
        last_name: "Lopez".to_string(),
    }
}

pub fn sample_product(product_code: &str) -> Product {
    Product {
        id: 0,
        product_code: product_code.to_string(),
        description: "Frozen peas".to_string(),
        height: 10.0,
        length: 20.0,
        width: 15.0,
        netweight: 1.5,
        expiration_rate: 0.7,
        freezing_rate: 0.3,
        recommended_freezing_temperature: -18.0,
        product_type_id: 2,
        seller_id: 1,
    }
}

pub fn sample_seller(cid: i64) -> Seller {
    Seller {
        id: 0,
        cid,
        company_name: "Acme Foods".to_string(),
        address: "Calle Falsa 123".to_string(),
        telephone: "555-123-4567".to_string(),
        locality_id: "6700".to_string(),
    }
}

pub fn sample_warehouse(warehouse_code: &str) -> Warehouse {
    Warehouse {
        id: 0,
        warehouse_code: warehouse_code.to_string(),
        address: "Av. Siempre Viva 742".to_string(),
        telephone: "5551234567".to_string(),
        minimum_capacity: 100,
        minimum_temperature: -5.0,
        locality_id: "6700".to_string(),
    }
}

pub fn sample_section(section_number: i32) -> Section {
    Section {
        id: 0,
        section_number,
        current_temperature: -10.0,
        minimum_temperature: -20.0,
        current_capacity: 40,
        minimum_capacity: 10,
        maximum_capacity: 100,
        warehouse_id: 1,
        product_type_id: 2,
    }
}

/// In-memory repositories behind a test server, so tests can seed rows and inject failures
pub struct TestRepositories {
    pub products: Arc<InMemoryRepository<Product>>,
    pub sellers: Arc<InMemoryRepository<Seller>>,
    pub buyers: Arc<InMemoryRepository<Buyer>>,
    pub employees: Arc<InMemoryRepository<Employee>>,
    pub warehouses: Arc<InMemoryRepository<Warehouse>>,
    pub sections: Arc<InMemoryRepository<Section>>,
}

impl TestRepositories {
    fn new() -> Self {
        Self {
            products: Arc::new(InMemoryRepository::new().with_unique_key(|p: &Product| p.product_code.clone())),
            sellers: Arc::new(InMemoryRepository::new().with_unique_key(|s: &Seller| s.cid.to_string())),
            buyers: Arc::new(InMemoryRepository::new().with_unique_key(|b: &Buyer| b.card_number_id.to_string())),
            employees: Arc::new(InMemoryRepository::new().with_unique_key(|e: &Employee| e.card_number_id.to_string())),
            warehouses: Arc::new(InMemoryRepository::new().with_unique_key(|w: &Warehouse| w.warehouse_code.clone())),
            sections: Arc::new(InMemoryRepository::new().with_unique_key(|s: &Section| s.section_number.to_string())),
        }
    }
}

pub fn create_test_config() -> Config {
    Config {
        storage_timeout: Duration::from_secs(2),
        ..Default::default()
    }
}

pub fn create_test_state() -> (AppState, TestRepositories) {
    let config = create_test_config();
    let repos = TestRepositories::new();
    let deadline = config.storage_timeout;

    let state = AppState::builder()
        .products(CrudService::new(repos.products.clone(), deadline))
        .sellers(CrudService::new(repos.sellers.clone(), deadline))
        .buyers(CrudService::new(repos.buyers.clone(), deadline))
        .employees(CrudService::new(repos.employees.clone(), deadline))
        .warehouses(CrudService::new(repos.warehouses.clone(), deadline))
        .sections(CrudService::new(repos.sections.clone(), deadline))
        .config(config)
        .build();

    (state, repos)
}

pub fn create_test_app() -> (TestServer, TestRepositories) {
    let (state, repos) = create_test_state();
    let server = TestServer::new(build_router(state)).expect("Failed to create test server");
    (server, repos)
}

/// Foreign key failure as MySQL reports deleting a row that others still reference
pub fn referenced_row_error(column: &str) -> DbError {
    DbError::ForeignKeyViolation {
        constraint: None,
        column: Some(column.to_string()),
        referenced: true,
        message: "Cannot delete or update a parent row: a foreign key constraint fails".to_string(),
    }
}

/// Foreign key failure as MySQL reports writing a row whose reference does not exist
pub fn missing_reference_error(column: &str) -> DbError {
    DbError::ForeignKeyViolation {
        constraint: None,
        column: Some(column.to_string()),
        referenced: false,
        message: "Cannot add or update a child row: a foreign key constraint fails".to_string(),
    }
}
