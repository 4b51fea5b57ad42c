//! Configuration management for vgctl

use crate::cli::Cli;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use voicegate_core::errors::CoreError;

/// Configuration for the vgctl CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VgctlConfig {
    /// Voicegate API endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for VgctlConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            timeout: 30,
        }
    }
}

impl VgctlConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: &Option<std::path::PathBuf>) -> Result<Self, CoreError> {
        let mut figment = Figment::from(Serialized::defaults(VgctlConfig::default()));

        // Load from default config file if it exists
        let default_config_paths = ["vgctl.yaml", "vgctl.yml", ".vgctl.yaml", ".vgctl.yml"];
        for path in &default_config_paths {
            if Path::new(path).exists() {
                figment = figment.merge(Yaml::file(path));
                break;
            }
        }

        // Load from specified config file
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

        // Load from environment variables (prefixed with VGCTL_)
        figment = figment.merge(Env::prefixed("VGCTL_"));

        figment
            .extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse configuration: {}", e)))
    }

    /// Apply CLI argument overrides to the configuration
    pub fn with_overrides(mut self, args: &Cli) -> Self {
        if let Some(ref endpoint) = args.endpoint {
            self.endpoint = endpoint.clone();
        }

        self
    }

    /// Get the full URL for an API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), path)
    }
}
