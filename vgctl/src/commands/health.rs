//! Health check command implementation

use crate::client::{HealthResponse, VoicegateClient};
use crate::config::VgctlConfig;
use colored::*;
use tracing::info;
use voicegate_core::errors::CoreError;

/// Handle health check command
pub async fn handle_health_command(config: &VgctlConfig) -> Result<(), CoreError> {
    let client = VoicegateClient::new(config.clone())?;

    info!("Checking Voicegate health at {}", config.endpoint);

    match check_health(&client).await {
        Ok(health) => {
            println!("{}", "✓ Voicegate is healthy".green().bold());
            println!("Status: {}", health.status.green());
            Ok(())
        }
        Err(e) => {
            println!("{}", "✗ Voicegate health check failed".red().bold());
            println!("Error: {}", e.to_string().red());
            Err(e)
        }
    }
}

/// Perform health check
async fn check_health(client: &VoicegateClient) -> Result<HealthResponse, CoreError> {
    let response = client.get("/health").await?;
    client.handle_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_command_against_unreachable_endpoint() {
        let config = VgctlConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout: 1,
        };
        let result = handle_health_command(&config).await;
        assert!(result.is_err());
    }
}
