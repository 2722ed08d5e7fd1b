//! MongoDB-backed `ProductStore`.
//!
//! One `Client` is built at startup from the connection string and shared
//! across all requests; pooling, retry, and timeouts belong to the driver.

use crate::model::{DeleteSummary, NewProduct, Product, ProductPatch, UpdateSummary};
use crate::store::{parse_object_id, ProductStore, StoreError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// Database name used when neither the config nor the connection string
/// names one
const DEFAULT_DATABASE: &str = "product_api";

/// Collection holding product records. Deployed databases store products
/// under `users`; kept for data compatibility.
const COLLECTION: &str = "users";

/// Wire shape of a product inside MongoDB
#[derive(Debug, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    category: String,
    name: String,
    size: String,
    value: f64,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            category: doc.category,
            name: doc.name,
            size: doc.size,
            value: doc.value,
        }
    }
}

/// Production storage backend over the MongoDB driver
#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<ProductDocument>,
}

impl MongoStore {
    /// Connect to MongoDB and resolve the target database.
    ///
    /// The driver connects lazily, so this succeeds even when the server
    /// is unreachable; operations surface the failure per request.
    pub async fn connect(uri: &str, db_override: Option<&str>) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = match db_override {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        Ok(Self {
            collection: database.collection(COLLECTION),
        })
    }
}

#[async_trait]
impl ProductStore for MongoStore {
    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let document = ProductDocument {
            id: ObjectId::new(),
            category: input.category,
            name: input.name,
            size: input.size,
            value: input.value,
        };
        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let oid = parse_object_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Product::from))
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<UpdateSummary, StoreError> {
        let oid = parse_object_id(id)?;

        let mut set = Document::new();
        if let Some(category) = patch.category {
            set.insert("category", category);
        }
        if let Some(name) = patch.name {
            set.insert("name", name);
        }
        if let Some(size) = patch.size {
            set.insert("size", size);
        }
        if let Some(value) = patch.value {
            set.insert("value", value);
        }

        // MongoDB rejects an empty $set; an empty patch degrades to a
        // match check.
        if set.is_empty() {
            let matched = self
                .collection
                .find_one(doc! { "_id": oid })
                .await?
                .map_or(0, |_| 1);
            return Ok(UpdateSummary {
                matched,
                modified: 0,
            });
        }

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": set })
            .await?;
        Ok(UpdateSummary {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, id: &str) -> Result<DeleteSummary, StoreError> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(DeleteSummary {
            deleted: result.deleted_count,
        })
    }
}
