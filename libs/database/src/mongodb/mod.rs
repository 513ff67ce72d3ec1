//! MongoDB document store backend
//!
//! Provides connection management, health checks and the [`MongoDocumentStore`].

mod config;
mod connector;
mod health;
mod store;

pub use config::MongoConfig;
pub use connector::connect_from_config;
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use store::MongoDocumentStore;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Database};
