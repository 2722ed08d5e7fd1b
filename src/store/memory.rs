//! In-memory `ProductStore`.
//!
//! Backs the HTTP integration tests and local hacking without a MongoDB
//! instance. Ids are freshly generated ObjectIds so id-format semantics
//! (including malformed-id rejection) match the Mongo backend exactly.

use crate::model::{DeleteSummary, NewProduct, Product, ProductPatch, UpdateSummary};
use crate::store::{parse_object_id, ProductStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

/// DashMap-backed storage, one entry per product keyed by id hex
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<String, Product>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let product = Product {
            id: ObjectId::new().to_hex(),
            category: input.category,
            name: input.name,
            size: input.size,
            value: input.value,
        };
        self.records.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.records.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        parse_object_id(id)?;
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<UpdateSummary, StoreError> {
        parse_object_id(id)?;

        let Some(mut entry) = self.records.get_mut(id) else {
            return Ok(UpdateSummary {
                matched: 0,
                modified: 0,
            });
        };

        let before = entry.value().clone();
        let record = entry.value_mut();
        if let Some(category) = patch.category {
            record.category = category;
        }
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(size) = patch.size {
            record.size = size;
        }
        if let Some(value) = patch.value {
            record.value = value;
        }

        // Mirror MongoDB: a no-op $set matches but does not modify
        let modified = u64::from(*record != before);
        Ok(UpdateSummary {
            matched: 1,
            modified,
        })
    }

    async fn delete(&self, id: &str) -> Result<DeleteSummary, StoreError> {
        parse_object_id(id)?;
        let deleted = u64::from(self.records.remove(id).is_some());
        Ok(DeleteSummary { deleted })
    }
}
