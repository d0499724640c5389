use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use super::DocumentStore;
use crate::errors::ServiceError;

/// File-backed document store: one pretty-printed `<collection>.json` per collection.
///
/// No lock and no atomic rename: a write replaces the file contents in place.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn path_for(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    async fn ensure_dir(&self) -> Result<(), ServiceError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| ServiceError::storage(format!("cannot create {}: {e}", self.data_dir.display())))
    }

    async fn write_document(&self, path: &PathBuf, document: &Value) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(document).map_err(ServiceError::storage)?;
        fs::write(path, data)
            .await
            .map_err(|e| ServiceError::storage(format!("cannot write {}: {e}", path.display())))
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn read(&self, collection: &str, default_shape: &Value) -> Result<Value, ServiceError> {
        self.ensure_dir().await?;
        let path = self.path_for(collection);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%collection, path = %path.display(), "collection file missing; creating with default shape");
                self.write_document(&path, default_shape).await?;
                return Ok(default_shape.clone());
            }
            Err(e) => return Err(ServiceError::storage(format!("cannot read {}: {e}", path.display()))),
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                common::metrics::CORRUPT_READS_TOTAL.inc();
                warn!(%collection, path = %path.display(), error = %e, "malformed collection file; using default shape");
                Ok(default_shape.clone())
            }
        }
    }

    async fn write(&self, collection: &str, document: &Value) -> Result<(), ServiceError> {
        self.ensure_dir().await?;
        let path = self.path_for(collection);
        self.write_document(&path, document).await
    }
}
