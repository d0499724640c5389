use std::{marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::DocumentStore;
use crate::errors::ServiceError;

/// Typed accessor over one named collection document (`{ <name>: [T, ...] }`).
///
/// Every lookup reloads the whole document and scans it linearly. Reads and
/// the load-check-append-write cycle of inserts share a per-collection mutex,
/// so two requests in the same process cannot drop each other's records and
/// the first read cannot overwrite a concurrent first insert. Processes
/// sharing a data directory are not coordinated.
///
/// Records that do not decode as `T` are skipped on read but kept on disk.
pub struct Collection<T> {
    name: &'static str,
    store: Arc<dyn DocumentStore>,
    guard: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(name: &'static str, store: Arc<dyn DocumentStore>) -> Self {
        Self { name, store, guard: Mutex::new(()), _record: PhantomData }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `{ <name>: [] }`
    pub fn default_shape(&self) -> Value {
        let mut doc = Map::new();
        doc.insert(self.name.to_string(), Value::Array(Vec::new()));
        Value::Object(doc)
    }

    /// Raw array items. A missing key or a non-array value reads as empty.
    /// Callers hold `guard`.
    async fn load_items(&self) -> Result<Vec<Value>, ServiceError> {
        let mut doc = self.store.read(self.name, &self.default_shape()).await?;
        match doc.get_mut(self.name).map(Value::take) {
            Some(Value::Array(items)) => Ok(items),
            _ => {
                debug!(collection = self.name, "collection key missing or not an array; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn decode(&self, items: &[Value]) -> Vec<T> {
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match T::deserialize(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    common::metrics::record_skipped(self.name);
                    warn!(collection = self.name, index, error = %e, "skipping record that does not fit");
                    None
                }
            })
            .collect()
    }

    /// Load every record that decodes.
    pub async fn load(&self) -> Result<Vec<T>, ServiceError> {
        let _guard = self.guard.lock().await;
        let items = self.load_items().await?;
        Ok(self.decode(&items))
    }

    pub async fn find<F>(&self, pred: F) -> Result<Option<T>, ServiceError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.load().await?.into_iter().find(|r| pred(r)))
    }

    pub async fn filter<F>(&self, pred: F) -> Result<Vec<T>, ServiceError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.load().await?.into_iter().filter(|r| pred(r)).collect())
    }

    /// Append a record built by `build` after `check` accepts the current records.
    ///
    /// `check` sees the freshly loaded collection and returns the error to
    /// reject with (typically a uniqueness conflict). Items that did not
    /// decode are written back unchanged.
    pub async fn insert_with<C, B>(&self, check: C, build: B) -> Result<T, ServiceError>
    where
        C: FnOnce(&[T]) -> Result<(), ServiceError> + Send,
        B: FnOnce() -> T + Send,
    {
        let _guard = self.guard.lock().await;
        let mut items = self.load_items().await?;
        check(&self.decode(&items))?;
        let record = build();
        items.push(serde_json::to_value(&record).map_err(ServiceError::storage)?);

        let mut doc = Map::new();
        doc.insert(self.name.to_string(), Value::Array(items));
        self.store.write(self.name, &Value::Object(doc)).await?;
        common::metrics::record_created(self.name);
        Ok(record)
    }
}
