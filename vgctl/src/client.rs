//! HTTP client for the Voicegate API

use crate::config::VgctlConfig;
use reqwest::{multipart, Client, Response};
use serde::Deserialize;
use tracing::{debug, error};
use voicegate_core::errors::CoreError;

/// API client for Voicegate
pub struct VoicegateClient {
    client: Client,
    config: VgctlConfig,
}

impl VoicegateClient {
    /// Create a new API client
    pub fn new(config: VgctlConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response, CoreError> {
        let url = self.config.api_url(path);
        debug!("GET {}", url);

        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| CoreError::Internal(format!("HTTP GET failed: {}", e)))
    }

    /// Make a POST request with a multipart form body
    pub async fn post_multipart(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<Response, CoreError> {
        let url = self.config.api_url(path);
        debug!("POST {} (multipart)", url);

        self.client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| CoreError::Internal(format!("HTTP POST failed: {}", e)))
    }

    /// Handle API response, checking status and parsing JSON
    pub async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, CoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| CoreError::Internal(format!("Failed to parse JSON response: {}", e)))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("API error {}: {}", status, error_text);

            match status.as_u16() {
                400 => Err(CoreError::Internal(format!("Bad request: {}", error_text))),
                404 => Err(CoreError::Internal("Resource not found".to_string())),
                500..=599 => Err(CoreError::Internal(format!("Server error: {}", error_text))),
                _ => Err(CoreError::Internal(format!(
                    "HTTP error {}: {}",
                    status, error_text
                ))),
            }
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &VgctlConfig {
        &self.config
    }
}

/// Health check response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Transcription response
#[derive(Debug, Deserialize)]
pub struct TranscribeResult {
    pub text: String,
}
