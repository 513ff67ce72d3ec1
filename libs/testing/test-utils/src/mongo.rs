//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("test_events");
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub host: String,
    pub port: u16,
}

impl TestMongo {
    /// Create a new test MongoDB instance
    pub async fn new() -> Self {
        let container = Mongo::default()
            .with_tag("7.0")
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let host = "127.0.0.1".to_string();
        let client = Client::with_uri_str(format!("mongodb://{}:{}", host, port))
            .await
            .expect("Failed to create MongoDB client");

        tracing::info!(port, "Test MongoDB ready (mongo 7.0)");

        Self {
            container,
            client,
            host,
            port,
        }
    }

    /// Get a cloned client (useful for passing to services)
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Handle to a database on the test server
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Connection string for manual client creation
    pub fn connection_string(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }
}

impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}
