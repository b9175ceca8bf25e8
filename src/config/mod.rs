//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `YOGA_BOOKING` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use yoga_booking::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod client;
mod error;
mod notification;
mod seed;
mod server;

pub use client::ClientConfig;
pub use error::{ConfigError, ValidationError};
pub use notification::NotificationConfig;
pub use seed::SeedConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// local setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// REST client configuration (API base URL)
    #[serde(default)]
    pub client: ClientConfig,

    /// Confirmation notice display settings
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Accounts and teachers created at startup
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `YOGA_BOOKING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `YOGA_BOOKING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `YOGA_BOOKING__CLIENT__API_BASE_URL=...` -> `client.api_base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("YOGA_BOOKING")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.client.validate()?;
        self.notifications.validate()?;
        self.seed.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("YOGA_BOOKING__SERVER__PORT");
        env::remove_var("YOGA_BOOKING__SERVER__ENVIRONMENT");
        env::remove_var("YOGA_BOOKING__CLIENT__API_BASE_URL");
        env::remove_var("YOGA_BOOKING__NOTIFICATIONS__DURATION_MS");
        env::remove_var("YOGA_BOOKING__SEED__ADMIN_EMAIL");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.client.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.notifications.duration_ms, 3000);
        assert_eq!(config.seed.admin_email, "yoga@studio.com");
    }

    #[test]
    fn test_validate_default_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("YOGA_BOOKING__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("YOGA_BOOKING__SERVER__PORT", "3000");
        env::set_var("YOGA_BOOKING__NOTIFICATIONS__DURATION_MS", "5000");
        env::set_var("YOGA_BOOKING__SEED__ADMIN_EMAIL", "admin@studio.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.notifications.duration_ms, 5000);
        assert_eq!(config.seed.admin_email, "admin@studio.com");
    }

    #[test]
    fn test_invalid_client_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("YOGA_BOOKING__CLIENT__API_BASE_URL", "ftp://example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidApiBaseUrl));
    }
}
