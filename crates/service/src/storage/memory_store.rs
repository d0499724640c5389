use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::warn;

use super::DocumentStore;
use crate::errors::ServiceError;

/// In-memory document store used as a test double for [`super::JsonFileStore`].
///
/// Documents are kept as serialized text so malformed content can be seeded
/// and read back the same way the file store would see it.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw text in place of a collection document.
    pub async fn seed_raw(&self, collection: &str, raw: impl Into<String>) {
        self.documents.write().await.insert(collection.to_string(), raw.into());
    }

    /// Raw text currently stored for a collection, if any.
    pub async fn raw(&self, collection: &str) -> Option<String> {
        self.documents.read().await.get(collection).cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn read(&self, collection: &str, default_shape: &Value) -> Result<Value, ServiceError> {
        let mut docs = self.documents.write().await;
        let raw = match docs.get(collection) {
            Some(raw) => raw.clone(),
            None => {
                let raw = serde_json::to_string(default_shape).map_err(ServiceError::storage)?;
                docs.insert(collection.to_string(), raw);
                return Ok(default_shape.clone());
            }
        };
        drop(docs);

        match serde_json::from_str(&raw) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!(%collection, error = %e, "malformed collection document; using default shape");
                Ok(default_shape.clone())
            }
        }
    }

    async fn write(&self, collection: &str, document: &Value) -> Result<(), ServiceError> {
        let raw = serde_json::to_string(document).map_err(ServiceError::storage)?;
        self.documents.write().await.insert(collection.to_string(), raw);
        Ok(())
    }
}
