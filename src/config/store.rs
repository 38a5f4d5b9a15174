//! Tool store configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Tool store configuration
#[derive(Clone, Deserialize)]
pub struct StoreConfig {
    /// Which store implementation to use
    #[serde(default)]
    pub backend: StoreBackend,

    /// Firestore project id (required for the firestore backend)
    pub project_id: Option<String>,

    /// Firestore database id
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection holding the tools
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Firestore REST base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Web API key appended to every request
    pub api_key: Option<String>,

    /// Optional per-request timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
}

/// Store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Firestore,
}

impl StoreConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.collection.is_empty() || self.collection.contains('/') {
            return Err(ValidationError::InvalidCollection);
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 || secs > 300 {
                return Err(ValidationError::InvalidStoreTimeout);
            }
        }
        if self.backend == StoreBackend::Firestore {
            if self.project_id.as_ref().map_or(true, |p| p.is_empty()) {
                return Err(ValidationError::MissingRequired("STORE__PROJECT_ID"));
            }
            if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
                return Err(ValidationError::InvalidStoreUrl);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("backend", &self.backend)
            .field("project_id", &self.project_id)
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            project_id: None,
            database: default_database(),
            collection: default_collection(),
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_collection() -> String {
    "tools".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}
