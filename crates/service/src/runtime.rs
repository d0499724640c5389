//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate can prepare storage
//! and build the document store through `service` alone.

use std::sync::Arc;

use crate::storage::{DocumentStore, JsonFileStore};

/// Ensure the data directory exists and return a file-backed store rooted there.
pub async fn prepare_store(data_dir: &str) -> anyhow::Result<Arc<dyn DocumentStore>> {
    common::env::ensure_env(data_dir).await?;
    Ok(Arc::new(JsonFileStore::new(data_dir)))
}
