//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! Every entity exposes the same five routes under `/api/v1`:
//!
//! - **Products** (`/api/v1/products/*`)
//! - **Sellers** (`/api/v1/sellers/*`)
//! - **Buyers** (`/api/v1/buyers/*`)
//! - **Employees** (`/api/v1/employees/*`)
//! - **Warehouses** (`/api/v1/warehouses/*`)
//! - **Sections** (`/api/v1/sections/*`)
//!
//! `POST /` creates, `GET /` lists, `GET /{id}` fetches, `PATCH /{id}` merges the body into the
//! stored entity and `DELETE /{id}` removes it.
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/api/docs` when the server is running.

pub mod handlers;
pub mod models;
