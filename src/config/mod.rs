//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates, with the `TOOL_SHELF` prefix and `__` between nested keys.
//! Every section has defaults, so an empty environment yields a runnable
//! in-memory setup.
//!
//! # Example
//!
//! ```no_run
//! use tool_shelf::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod server;
mod store;
mod ui;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use store::{StoreBackend, StoreConfig};
pub use ui::UiConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Tool store configuration (backend, Firestore location)
    #[serde(default)]
    pub store: StoreConfig,

    /// Page presentation (title, toasts)
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `TOOL_SHELF__*` variables:
    ///
    /// - `TOOL_SHELF__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TOOL_SHELF__STORE__BACKEND=firestore` -> `store.backend = Firestore`
    /// - `TOOL_SHELF__UI__TOAST_AUTO_CLOSE_MS=3000` -> `ui.toast_auto_close_ms = 3000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOOL_SHELF")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.store.validate()?;
        self.ui.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
