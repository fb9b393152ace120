//! # wmsctl: Warehouse Management REST API
//!
//! `wmsctl` serves CRUD endpoints for the six entities of a warehouse-management domain:
//! products, the sellers that offer them, buyers, employees, warehouses, and the
//! temperature-controlled sections inside each warehouse. Data lives in MySQL.
//!
//! ## Architecture
//!
//! Every entity flows through the same three layers:
//!
//! ```text
//! HTTP request
//!     │
//!     ▼
//! api::handlers   decode JSON, check keys and zero values, map errors to status codes
//!     │
//!     ▼
//! service         validate business rules, translate storage errors, enforce a deadline
//!     │
//!     ▼
//! db::handlers    one parameterized statement per operation
//!     │
//!     ▼
//! MySQL
//! ```
//!
//! Each layer has its own closed error enum: [`db::errors::DbError`] →
//! [`service::ServiceError`] → [`errors::Error`], which renders the JSON error envelope.
//!
//! The only shared state is the connection pool, owned by the repositories inside
//! [`AppState`] and handed to handlers through axum's `State` extractor.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use wmsctl::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = wmsctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     wmsctl::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! Migrations are embedded in the binary and run on startup when `database.run_migrations` is
//! set. They can also be applied by hand:
//!
//! ```no_run
//! # use sqlx::MySqlPool;
//! # async fn example(pool: MySqlPool) -> Result<(), sqlx::migrate::MigrateError> {
//! wmsctl::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod service;
pub mod telemetry;
mod types;

#[cfg(test)]
pub mod test_utils;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use bon::Builder;
pub use config::Config;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, error, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api::handlers::{buyers, employees, products, sections, sellers, warehouses};
use crate::config::PoolSettings;
use crate::db::handlers::{Buyers, Employees, Products, Sections, Sellers, Warehouses};
use crate::openapi::ApiDoc;
use crate::service::{BuyerService, CrudService, EmployeeService, ProductService, SectionService, SellerService, WarehouseService};

pub use types::{BuyerId, EmployeeId, ProductId, ProductTypeId, SectionId, SellerId, WarehouseId};

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let deadline = config.storage_timeout;
/// let state = AppState::builder()
///     .employees(CrudService::new(Arc::new(Employees::new(pool.clone())), deadline))
///     // ... one service per entity
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub config: Config,
    pub products: ProductService,
    pub sellers: SellerService,
    pub buyers: BuyerService,
    pub employees: EmployeeService,
    pub warehouses: WarehouseService,
    pub sections: SectionService,
}

impl AppState {
    /// Wire every service to its MySQL repository
    pub fn with_pool(config: Config, pool: &MySqlPool) -> Self {
        let deadline = config.storage_timeout;

        AppState::builder()
            .products(CrudService::new(Arc::new(Products::new(pool.clone())), deadline))
            .sellers(CrudService::new(Arc::new(Sellers::new(pool.clone())), deadline))
            .buyers(CrudService::new(Arc::new(Buyers::new(pool.clone())), deadline))
            .employees(CrudService::new(Arc::new(Employees::new(pool.clone())), deadline))
            .warehouses(CrudService::new(Arc::new(Warehouses::new(pool.clone())), deadline))
            .sections(CrudService::new(Arc::new(Sections::new(pool.clone())), deadline))
            .config(config)
            .build()
    }
}

/// Get the wmsctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

fn pool_options(settings: &PoolSettings) -> MySqlPoolOptions {
    let seconds = |secs: u64| (secs > 0).then(|| Duration::from_secs(secs));

    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(seconds(settings.idle_timeout_secs))
        .max_lifetime(seconds(settings.max_lifetime_secs))
}

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/products", post(products::create_product).get(products::list_products))
        .route(
            "/products/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .route("/sellers", post(sellers::create_seller).get(sellers::list_sellers))
        .route(
            "/sellers/{id}",
            get(sellers::get_seller).patch(sellers::update_seller).delete(sellers::delete_seller),
        )
        .route("/buyers", post(buyers::create_buyer).get(buyers::list_buyers))
        .route(
            "/buyers/{id}",
            get(buyers::get_buyer).patch(buyers::update_buyer).delete(buyers::delete_buyer),
        )
        .route("/employees", post(employees::create_employee).get(employees::list_employees))
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .patch(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route("/warehouses", post(warehouses::create_warehouse).get(warehouses::list_warehouses))
        .route(
            "/warehouses/{id}",
            get(warehouses::get_warehouse)
                .patch(warehouses::update_warehouse)
                .delete(warehouses::delete_warehouse),
        )
        .route("/sections", post(sections::create_section).get(sections::list_sections))
        .route(
            "/sections/{id}",
            get(sections::get_section)
                .patch(sections::update_section)
                .delete(sections::delete_section),
        )
        .with_state(state);

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/v1", api_routes)
        .merge(Scalar::with_url("/api/docs", ApiDoc::openapi()));

    with_middleware(router)
}

/// Access logging outside, panic recovery inside, so a recovered panic is still logged as a 500
fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(panic = detail, "Request handler panicked");

    errors::error_response(StatusCode::INTERNAL_SERVER_ERROR, "unknown server error")
}

/// A configured server: router plus the pool it owns.
pub struct Application {
    router: Router,
    config: Config,
    pool: MySqlPool,
}

impl Application {
    /// Connect to MySQL, apply migrations if configured, and build the router
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!(
            host = %config.host,
            port = config.port,
            storage_timeout = %humantime::format_duration(config.storage_timeout),
            "Starting warehouse API"
        );

        let pool = pool_options(&config.database.pool).connect(&config.database.url).await?;

        if config.database.run_migrations {
            info!("Running database migrations");
            migrator().run(&pool).await?;
        }

        let state = AppState::with_pool(config.clone(), &pool);
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Warehouse API listening on http://{}, docs at http://localhost:{}/api/docs",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
