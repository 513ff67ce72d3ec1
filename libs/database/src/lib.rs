//! Document store library: a type-generic CRUD abstraction with in-memory and MongoDB backends
//!
//! # Features
//!
//! - `mongodb` - MongoDB backend, connector and health checks
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ## In-memory
//!
//! ```ignore
//! use database::{DocumentStore, InMemoryDocumentStore};
//!
//! let store = InMemoryDocumentStore::new();
//! store.create(&event).await?;
//! let event: Event = store.get(&id).await?;
//! ```
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, MongoDocumentStore, connect_from_config};
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config(&config).await?;
//! let store = MongoDocumentStore::new(client.database(config.database()));
//! store.initialize::<Event>().await?;
//! ```

pub mod common;
pub mod store;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{StoreError, StoreResult};
pub use store::{Document, DocumentStore, InMemoryDocumentStore};
