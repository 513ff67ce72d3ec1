//! Generic document store
//!
//! A [`DocumentStore`] persists any type implementing [`Document`] into the
//! collection the type names through [`Document::COLLECTION`]. Callers never
//! spell out collection names or deal with driver-specific errors; every
//! failure arrives as a [`StoreError`](crate::StoreError), with
//! [`StoreError::NotFound`](crate::StoreError::NotFound) kept distinct so it
//! can be mapped to a 404.
//!
//! ```ignore
//! use database::{Document, DocumentStore, InMemoryDocumentStore};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Venue { id: String, name: String }
//!
//! impl Document for Venue {
//!     const COLLECTION: &'static str = "venue";
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! let store = InMemoryDocumentStore::new();
//! store.create(&venue).await?;
//! let all: Vec<Venue> = store.get_all().await?;
//! ```

mod in_memory;

pub use in_memory::InMemoryDocumentStore;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::StoreResult;

/// A value that can be persisted by a [`DocumentStore`].
///
/// `COLLECTION` is the lower-cased, unqualified type name (`Event` -> `"event"`).
/// Declaring it here keeps the type-to-collection mapping static and explicit.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Name of the collection holding documents of this type
    const COLLECTION: &'static str;

    /// Unique identifier of this document within its collection
    fn id(&self) -> &str;
}

/// Type-generic create/read/update/delete over a document database.
///
/// Implementations never retry. A write the backend reports as failed is an
/// error, never a partial success.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Insert `doc` into `T::COLLECTION`
    async fn create<T: Document>(&self, doc: &T) -> StoreResult<()>;

    /// Fetch the document with `id`, or `StoreError::NotFound`
    async fn get<T: Document>(&self, id: &str) -> StoreResult<T>;

    /// Fetch every document of `T::COLLECTION`; empty collections yield an empty vec
    async fn get_all<T: Document>(&self) -> StoreResult<Vec<T>>;

    /// Merge `doc` into the stored document with `id`.
    ///
    /// The caller passes the complete, already-merged record. There is no
    /// version check, so concurrent writers race and the last write wins.
    async fn update<T: Document>(&self, id: &str, doc: &T) -> StoreResult<()>;

    /// Remove the document with `id` from `T::COLLECTION`
    async fn delete<T: Document>(&self, id: &str) -> StoreResult<()>;
}
