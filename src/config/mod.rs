//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYPAL_EXPRESS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use paypal_express_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let response = config.paypal.response(Some("ACK=Success&TOKEN=EC-123"));
//! println!("Checkout at {}", response.redirect_url());
//! ```

mod error;
mod logging;
mod paypal;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use paypal::PaypalConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// production configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// PayPal configuration (sandbox flag)
    #[serde(default)]
    pub paypal: PaypalConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYPAL_EXPRESS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYPAL_EXPRESS__PAYPAL__SANDBOX=true` -> `paypal.sandbox = true`
    /// - `PAYPAL_EXPRESS__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `PAYPAL_EXPRESS__LOGGING__FORMAT=json` -> `logging.format = Json`
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
                    .prefix("PAYPAL_EXPRESS")
                    .separator("__")
                    .try_parsing(true),
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
        self.logging.validate()?;
        Ok(())
    }

    /// Check if buyers are sent to the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.paypal.sandbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("PAYPAL_EXPRESS__PAYPAL__SANDBOX");
        env::remove_var("PAYPAL_EXPRESS__LOGGING__LEVEL");
        env::remove_var("PAYPAL_EXPRESS__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(!config.is_sandbox());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_sandbox_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PAYPAL_EXPRESS__PAYPAL__SANDBOX", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_sandbox());
    }

    #[test]
    fn test_load_logging_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PAYPAL_EXPRESS__LOGGING__LEVEL", "debug");
        env::set_var("PAYPAL_EXPRESS__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "paypal_express_checkout=verbose".to_string();
        assert!(config.validate().is_err());
    }
}
