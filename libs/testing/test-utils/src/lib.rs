//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongodb")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//!
//! # Usage
//!
//! Add `features = ["mongodb"]` to your dev-dependencies:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongodb"] }
//! ```
//!
//! Then in your tests:
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore = "requires docker"]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!     let db = mongo.database(&builder.database_name());
//! }
//! ```

#[cfg(feature = "mongodb")]
mod mongo;

#[cfg(feature = "mongodb")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_event");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Database name unique to this builder's seed, so tests sharing a server stay isolated
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("event", "main"), "test-event-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}
