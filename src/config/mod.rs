//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `SWITCHBOARD` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use switchboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod backends;
mod database;
mod error;
mod server;

pub use backends::{BackendsConfig, GeminiSettings, NewsSettings, WeatherSettings};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// External backend configuration (keys and base URLs)
    pub backends: BackendsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file if present, then environment variables with the
    /// `SWITCHBOARD` prefix, `__` separating nested values:
    ///
    /// - `SWITCHBOARD__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SWITCHBOARD__BACKENDS__GEMINI__API_KEY=...` -> `backends.gemini.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SWITCHBOARD")
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
        self.database.validate()?;
        self.backends.validate()?;
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

    fn set_minimal_env() {
        env::set_var(
            "SWITCHBOARD__DATABASE__URL",
            "postgresql://test@localhost/test",
        );
        env::set_var("SWITCHBOARD__BACKENDS__GEMINI__API_KEY", "gm-test");
        env::set_var("SWITCHBOARD__BACKENDS__NEWS__API_KEY", "news-test");
        env::set_var("SWITCHBOARD__BACKENDS__WEATHER__API_KEY", "wx-test");
    }

    fn clear_env() {
        env::remove_var("SWITCHBOARD__DATABASE__URL");
        env::remove_var("SWITCHBOARD__BACKENDS__GEMINI__API_KEY");
        env::remove_var("SWITCHBOARD__BACKENDS__NEWS__API_KEY");
        env::remove_var("SWITCHBOARD__BACKENDS__WEATHER__API_KEY");
        env::remove_var("SWITCHBOARD__SERVER__PORT");
        env::remove_var("SWITCHBOARD__SERVER__ENVIRONMENT");
    }

    #[test]
    fn loads_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.backends.gemini.api_key, "gm-test");
    }

    #[test]
    fn validates_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SWITCHBOARD__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
