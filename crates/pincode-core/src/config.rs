//! Configuration management for the validator

use serde::{Deserialize, Serialize};
use crate::constants::{DEFAULT_POSTAL_API_BASE_URL, SAMPLE_ADDRESSES};
use crate::error::{PincodeError, Result};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub postal_api: PostalApiConfig,

    /// Addresses to validate when none are given on the command line
    #[serde(default = "default_addresses")]
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostalApiConfig {
    #[serde(alias = "url", default = "default_postal_api_base_url")]  // Accept both 'base_url' and 'url'
    pub base_url: String,
}

impl Default for PostalApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_postal_api_base_url(),
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            postal_api: PostalApiConfig::default(),
            addresses: default_addresses(),
        }
    }
}

// Default functions
fn default_postal_api_base_url() -> String {
    DEFAULT_POSTAL_API_BASE_URL.to_string()
}

fn default_addresses() -> Vec<String> {
    SAMPLE_ADDRESSES.iter().map(|s| s.to_string()).collect()
}

impl ValidatorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PincodeError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PincodeError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.postal_api.base_url.trim();
        if base_url.is_empty() {
            return Err(PincodeError::Config("Postal API base URL is required".to_string()));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(PincodeError::Config(format!(
                "Postal API base URL must be http(s), got '{}'",
                base_url
            )));
        }

        Ok(())
    }
}
