//! Document storage for the job board collections.
//!
//! A collection is one JSON document holding a single named array
//! (`{"jobs": [...]}`). [`DocumentStore`] reads and writes whole documents;
//! [`collection::Collection`] layers typed record access on top.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ServiceError;

pub mod collection;
pub mod json_file_store;
pub mod memory_store;

pub use collection::Collection;
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

/// Whole-document persistence for named collections.
///
/// `read` never fails on malformed content: it logs and hands back
/// `default_shape`. A missing document is created with `default_shape` first.
/// `write` replaces the full document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn read(&self, collection: &str, default_shape: &Value) -> Result<Value, ServiceError>;
    async fn write(&self, collection: &str, document: &Value) -> Result<(), ServiceError>;
}
