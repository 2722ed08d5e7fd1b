//! API route handlers.
//!
//! - `products`: the five CRUD endpoints under `/api/users`
//! - `health`: liveness probe
//!
//! The swagger UI mount lives in `server::build_router`; the OpenAPI
//! document itself is assembled in `crate::docs`.

pub mod health;
pub mod products;

use crate::error::ApiError;

/// Welcome message for the root route (GET /)
pub async fn welcome() -> &'static str {
    "Welcome to the Product API"
}

/// 404 Not Found handler for undefined routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
