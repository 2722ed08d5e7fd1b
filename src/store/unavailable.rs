//! Stand-in store used when no connection string is configured.
//!
//! The server keeps serving without a database; the process stays up and
//! every data operation fails with `StoreError::Unavailable` instead of
//! the server refusing to start.

use crate::model::{DeleteSummary, NewProduct, Product, ProductPatch, UpdateSummary};
use crate::store::{ProductStore, StoreError};
use async_trait::async_trait;

/// `ProductStore` whose every operation fails with a storage error
pub struct UnavailableStore;

impl UnavailableStore {
    fn unavailable() -> StoreError {
        StoreError::Unavailable("no storage connection configured".to_string())
    }
}

#[async_trait]
impl ProductStore for UnavailableStore {
    async fn create(&self, _input: NewProduct) -> Result<Product, StoreError> {
        Err(Self::unavailable())
    }

    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Err(Self::unavailable())
    }

    async fn get_by_id(&self, _id: &str) -> Result<Option<Product>, StoreError> {
        Err(Self::unavailable())
    }

    async fn update(&self, _id: &str, _patch: ProductPatch) -> Result<UpdateSummary, StoreError> {
        Err(Self::unavailable())
    }

    async fn delete(&self, _id: &str) -> Result<DeleteSummary, StoreError> {
        Err(Self::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_operation_fails() {
        let store = UnavailableStore;
        assert!(matches!(
            store.list_all().await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.get_by_id("64b7f3a2e4b0c93f5a1d2e3f").await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
