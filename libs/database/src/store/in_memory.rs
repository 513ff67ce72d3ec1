//! InMemoryDocumentStore - HashMap-backed document store for tests and local development.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{Document, DocumentStore};
use crate::common::{StoreError, StoreResult};

type Collections = HashMap<&'static str, BTreeMap<String, Value>>;

/// In-memory document store.
///
/// Documents are kept as JSON values per collection, keyed by id. Clone-friendly
/// via Arc: clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<Collections>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `T::COLLECTION`.
    pub fn len<T: Document>(&self) -> StoreResult<usize> {
        let collections = self.read()?;
        Ok(collections.get(T::COLLECTION).map_or(0, BTreeMap::len))
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Collections>> {
        self.collections
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Collections>> {
        self.collections
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    #[instrument(skip(self, doc), fields(collection = T::COLLECTION, id = doc.id()))]
    async fn create<T: Document>(&self, doc: &T) -> StoreResult<()> {
        let value = serde_json::to_value(doc)?;
        let mut collections = self.write()?;
        let collection = collections.entry(T::COLLECTION).or_default();

        if collection.contains_key(doc.id()) {
            let err = StoreError::Write(format!("Duplicate primary key `id`: {}", doc.id()));
            error!(
                "server error while inserting doc in collection '{}': {}",
                T::COLLECTION,
                err
            );
            return Err(err);
        }

        collection.insert(doc.id().to_string(), value);
        Ok(())
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn get<T: Document>(&self, id: &str) -> StoreResult<T> {
        let value = {
            let collections = self.read()?;
            collections
                .get(T::COLLECTION)
                .and_then(|collection| collection.get(id))
                .cloned()
        };

        let Some(value) = value else {
            debug!("doc not found with id '{}' in collection '{}'", id, T::COLLECTION);
            return Err(StoreError::not_found(T::COLLECTION, id));
        };

        serde_json::from_value(value).map_err(|e| {
            error!("unable to parse doc with id '{}': {}", id, e);
            StoreError::from(e)
        })
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn get_all<T: Document>(&self) -> StoreResult<Vec<T>> {
        let values: Vec<Value> = {
            let collections = self.read()?;
            collections
                .get(T::COLLECTION)
                .map(|collection| collection.values().cloned().collect())
                .unwrap_or_default()
        };

        values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| {
                error!("unable to parse docs: {}", e);
                StoreError::from(e)
            })
    }

    #[instrument(skip(self, doc), fields(collection = T::COLLECTION))]
    async fn update<T: Document>(&self, id: &str, doc: &T) -> StoreResult<()> {
        let Value::Object(fields) = serde_json::to_value(doc)? else {
            return Err(StoreError::Write(format!(
                "document for collection '{}' is not an object",
                T::COLLECTION
            )));
        };

        let mut collections = self.write()?;
        // Updating a missing id is a no-op, as it is for the database backend.
        if let Some(Value::Object(existing)) = collections
            .get_mut(T::COLLECTION)
            .and_then(|collection| collection.get_mut(id))
        {
            existing.extend(fields);
        }
        Ok(())
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn delete<T: Document>(&self, id: &str) -> StoreResult<()> {
        let mut collections = self.write()?;
        if let Some(collection) = collections.get_mut(T::COLLECTION) {
            collection.remove(id);
        }
        Ok(())
    }
}
