//! Data access layer.
//!
//! `ProductStore` is the seam between the HTTP handlers and the storage
//! backend. The production implementation talks to MongoDB; the in-memory
//! implementation backs the integration tests; the unavailable stand-in
//! serves when no connection string is configured.

pub mod memory;
pub mod mongo;
pub mod unavailable;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use unavailable::UnavailableStore;

use crate::model::{DeleteSummary, NewProduct, Product, ProductPatch, UpdateSummary};
use async_trait::async_trait;

/// Storage error taxonomy
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The supplied id is not a well-formed backend identifier
    #[error("malformed product id: {0}")]
    MalformedId(String),

    /// No storage backend is reachable or configured
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The MongoDB driver reported a failure
    #[error("storage backend error: {0}")]
    Backend(#[from] mongodb::error::Error),
}

/// Asynchronous per-record CRUD over the product collection.
///
/// Every operation round-trips to the backend; the service holds no cache.
/// Operations are single-record atomic, with no multi-record transactions.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product and return it with its assigned id
    async fn create(&self, input: NewProduct) -> Result<Product, StoreError>;

    /// Return every product, in storage-defined order
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Return the product with the given id, or `None` when a well-formed
    /// id matches nothing
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Apply the fields present in `patch` to the matching record; absent
    /// fields keep their stored values
    async fn update(&self, id: &str, patch: ProductPatch) -> Result<UpdateSummary, StoreError>;

    /// Remove the matching record. Deleting a missing id is a success
    /// with `deleted: 0`
    async fn delete(&self, id: &str) -> Result<DeleteSummary, StoreError>;
}

/// Parse a path id into a BSON ObjectId, mapping parse failures to
/// `StoreError::MalformedId`. Shared by every backend so id semantics
/// stay identical across them.
pub(crate) fn parse_object_id(id: &str) -> Result<mongodb::bson::oid::ObjectId, StoreError> {
    mongodb::bson::oid::ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(StoreError::MalformedId(_))
        ));
    }

    #[test]
    fn test_parse_object_id_accepts_hex() {
        let id = mongodb::bson::oid::ObjectId::new().to_hex();
        assert!(parse_object_id(&id).is_ok());
    }
}
