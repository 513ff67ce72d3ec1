use mongodb::{Client, bson::doc};
use std::time::Instant;

/// Health check status for the database
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Check database health with a `ping` command
///
/// ```ignore
/// let healthy = check_health(&client).await;
/// ```
pub async fn check_health(client: &Client) -> bool {
    check_health_detailed(client).await.healthy
}

/// Check database health, returning timing information and any error message
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = client.database("admin").run_command(doc! { "ping": 1 }).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}
