//! Configuration management for voicegated

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use voicegate_core::errors::CoreError;
use voicegate_http::HttpGatewayConfig;

/// Configuration for the Voicegate daemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Host to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Mount the optional authentication route group
    pub enable_auth_routes: bool,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            enable_auth_routes: false,
            request_timeout: 30,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from file and environment.
    ///
    /// Layering, lowest priority first: built-in defaults, the first
    /// `voicegate.yaml` / `voicegate.yml` found in the working directory,
    /// an explicitly passed config file, then `VOICEGATE_`-prefixed
    /// environment variables.
    pub fn load(config_path: &Option<std::path::PathBuf>) -> Result<Self, CoreError> {
        let mut figment = Figment::from(Serialized::defaults(GatewayConfig::default()));

        let default_config_paths = ["voicegate.yaml", "voicegate.yml"];
        for path in &default_config_paths {
            if Path::new(path).exists() {
                figment = figment.merge(Yaml::file(path));
                break;
            }
        }

        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Yaml::file(path));
            } else {
                return Err(CoreError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
        }

        figment = figment.merge(Env::prefixed("VOICEGATE_"));

        figment
            .extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse configuration: {}", e)))
    }

    /// Resolve the socket address to bind
    pub fn bind_address(&self) -> Result<SocketAddr, CoreError> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            CoreError::Configuration(format!(
                "Invalid bind address {}:{}: {}",
                self.host, self.port, e
            ))
        })
    }

    /// Convert into the HTTP adapter's configuration
    pub fn http_config(&self) -> Result<HttpGatewayConfig, CoreError> {
        Ok(HttpGatewayConfig {
            bind_address: self.bind_address()?,
            enable_cors: self.enable_cors,
            enable_auth_routes: self.enable_auth_routes,
            request_timeout: self.request_timeout,
        })
    }
}
