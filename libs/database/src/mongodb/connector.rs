use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::{error, info};

use super::MongoConfig;
use crate::common::{StoreError, StoreResult};

/// Connect using a MongoConfig
///
/// Builds a pooled client from the config and verifies the server is reachable
/// before returning. There is no retry: a failed connection is reported to the
/// caller, which is expected to abort startup.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
/// use core_config::FromEnv;
///
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> StoreResult<Client> {
    let url = config.url();
    info!(
        "Attempting to connect to database at {} (pool {}..{})",
        config.redacted_url(),
        config.min_pool_size,
        config.max_pool_size
    );

    let mut options = ClientOptions::parse(&url)
        .await
        .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client =
        Client::with_options(options).map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

    // Verify connection
    client.list_database_names().await.map_err(|e| {
        error!("unable to reach database: {}", e);
        StoreError::ConnectionFailed(e.to_string())
    })?;

    info!("Successfully connected to database");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let config = MongoConfig::default().with_url("not-a-connection-string");
        let err = connect_from_config(&config).await.unwrap_err();
        assert!(matches!(err, StoreError::ConnectionFailed(_)));
    }
}
