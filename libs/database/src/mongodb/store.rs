use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{doc, to_document},
    error::ErrorKind,
    options::IndexOptions,
};
use tracing::{debug, error, info, instrument};

use crate::common::{StoreError, StoreResult};
use crate::store::{Document, DocumentStore};

/// Server error code for "collection already exists"
const NAMESPACE_EXISTS: i32 = 48;

/// MongoDB-backed [`DocumentStore`]
///
/// Documents are stored as-is with their own `id` field, next to the
/// server-managed `_id`. Lookups filter on `id`, which carries a unique index
/// created by [`MongoDocumentStore::initialize`].
#[derive(Clone)]
pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection<T: Document>(&self) -> Collection<T> {
        self.database.collection::<T>(T::COLLECTION)
    }

    /// Ensure the collection for `T` exists along with its unique `id` index.
    ///
    /// An already existing collection is not an error, so this is safe to run
    /// on every startup.
    #[instrument(skip(self), fields(db = %self.database.name(), collection = T::COLLECTION))]
    pub async fn initialize<T: Document>(&self) -> StoreResult<()> {
        match self.database.create_collection(T::COLLECTION).await {
            Ok(()) => info!("created collection '{}'", T::COLLECTION),
            Err(e) if is_namespace_exists(&e) => {
                debug!("collection '{}' already exists", T::COLLECTION)
            }
            Err(e) => {
                error!("unable to create collection '{}': {}", T::COLLECTION, e);
                return Err(e.into());
            }
        }

        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection::<T>().create_index(index).await.map_err(|e| {
            error!("unable to create index on '{}': {}", T::COLLECTION, e);
            StoreError::from(e)
        })?;

        Ok(())
    }
}

fn is_namespace_exists(err: &mongodb::error::Error) -> bool {
    matches!(*err.kind, ErrorKind::Command(ref cmd) if cmd.code == NAMESPACE_EXISTS)
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[instrument(skip(self, doc), fields(collection = T::COLLECTION, id = doc.id()))]
    async fn create<T: Document>(&self, doc: &T) -> StoreResult<()> {
        self.collection::<T>().insert_one(doc).await.map_err(|e| {
            error!(
                "server error while inserting doc in collection '{}': {}",
                T::COLLECTION,
                e
            );
            StoreError::from(e)
        })?;
        Ok(())
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn get<T: Document>(&self, id: &str) -> StoreResult<T> {
        let found = self
            .collection::<T>()
            .find_one(doc! { "id": id })
            .await
            .map_err(|e| {
                error!("unable to get doc with id '{}': {}", id, e);
                StoreError::from(e)
            })?;

        found.ok_or_else(|| {
            debug!("doc not found with id '{}' in collection '{}'", id, T::COLLECTION);
            StoreError::not_found(T::COLLECTION, id)
        })
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn get_all<T: Document>(&self) -> StoreResult<Vec<T>> {
        let cursor = self.collection::<T>().find(doc! {}).await.map_err(|e| {
            error!("unable to query collection '{}': {}", T::COLLECTION, e);
            StoreError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            error!("unable to read docs from '{}': {}", T::COLLECTION, e);
            StoreError::from(e)
        })
    }

    #[instrument(skip(self, doc), fields(collection = T::COLLECTION))]
    async fn update<T: Document>(&self, id: &str, doc: &T) -> StoreResult<()> {
        let fields = to_document(doc)?;

        self.collection::<T>()
            .update_one(doc! { "id": id }, doc! { "$set": fields })
            .await
            .map_err(|e| {
                error!("server error while updating doc with id '{}': {}", id, e);
                StoreError::from(e)
            })?;
        Ok(())
    }

    #[instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn delete<T: Document>(&self, id: &str) -> StoreResult<()> {
        self.collection::<T>()
            .delete_one(doc! { "id": id })
            .await
            .map_err(|e| {
                error!("server error while deleting doc with id '{}': {}", id, e);
                StoreError::from(e)
            })?;
        Ok(())
    }
}
