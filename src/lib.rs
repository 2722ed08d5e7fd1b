//! Product API - HTTP REST service for a product catalog
//!
//! This crate provides a small HTTP server exposing CRUD operations on a
//! single `Product` collection stored in MongoDB. It supports:
//!
//! - **Product CRUD**: Create, list, fetch, update, and delete products
//! - **Generated Docs**: Interactive OpenAPI documentation at `/api-doc`
//! - **Health**: Liveness probe with uptime and storage status
//!
//! # Features
//!
//! - **Storage**: MongoDB via a swappable `ProductStore` trait (an
//!   in-memory implementation backs the integration tests)
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error envelopes with mapped status codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use product_api::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     product_api::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - Welcome message
//! - `GET /health` - Liveness probe
//! - `GET /api-doc` - Interactive API documentation
//! - `POST /api/users` - Create a product
//! - `GET /api/users` - List all products
//! - `GET /api/users/{id}` - Get a product by id
//! - `PUT /api/users/{id}` - Update a product (partial)
//! - `DELETE /api/users/{id}` - Delete a product

pub mod config;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{build_router, start_server};
pub use state::AppState;
