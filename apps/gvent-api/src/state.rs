//! Application state management.

use database::mongodb::{Client, MongoDocumentStore};

/// Shared application state.
///
/// Cloning is cheap: the client and the store share one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Database client, used for readiness pings and shutdown
    pub mongo_client: Client,
    /// Document store handed to the domain services
    pub store: MongoDocumentStore,
}
