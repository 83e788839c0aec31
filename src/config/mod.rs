//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! The Codewars API is unauthenticated, so there are no required variables;
//! every setting has a default suitable for running out of a checkout.
//!
//! # Example
//!
//! ```
//! use codewars_tutor::config::Config;
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     data_dir: "./data".to_string(),
//!     exercises_dir: "./exercises".to_string(),
//!     base_url: "https://www.codewars.com/api/v1".to_string(),
//!     request_timeout_ms: 10_000,
//!     log_level: "info".to_string(),
//! };
//!
//! println!("Exercises land in: {}", config.exercises_dir);
//! ```

use crate::error::ConfigError;

/// Default directory for the JSON documents (index, config, history).
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default directory for materialized exercises.
pub const DEFAULT_EXERCISES_DIR: &str = "./exercises";

/// Default base URL for the Codewars API.
pub const DEFAULT_BASE_URL: &str = "https://www.codewars.com/api/v1";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Minimum accepted request timeout.
pub const MIN_TIMEOUT_MS: u64 = 1_000;

/// Maximum accepted request timeout.
pub const MAX_TIMEOUT_MS: u64 = 120_000;

/// Application configuration.
///
/// This struct holds all configuration values for the Codewars Tutor server.
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the index, config, and history documents.
    pub data_dir: String,
    /// Directory exercises are materialized into.
    pub exercises_dir: String,
    /// Base URL of the Codewars API.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `DATA_DIR`: JSON document directory (default: `./data`)
    /// - `EXERCISES_DIR`: exercise output directory (default: `./exercises`)
    /// - `CODEWARS_BASE_URL`: API base URL (default: `https://www.codewars.com/api/v1`)
    /// - `REQUEST_TIMEOUT_MS`: request timeout (default: `10000`)
    /// - `LOG_LEVEL`: logging level (default: `info`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `REQUEST_TIMEOUT_MS` is not a valid positive integer
    /// - Any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into());

        let exercises_dir =
            std::env::var("EXERCISES_DIR").unwrap_or_else(|_| DEFAULT_EXERCISES_DIR.into());

        let base_url =
            std::env::var("CODEWARS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let request_timeout_ms =
            parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let config = Self {
            data_dir,
            exercises_dir,
            base_url,
            request_timeout_ms,
            log_level,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            exercises_dir: DEFAULT_EXERCISES_DIR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Validate a configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - the timeout is outside `[MIN_TIMEOUT_MS, MAX_TIMEOUT_MS]`
/// - the base URL is not an http(s) URL
/// - either directory is empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.request_timeout_ms < MIN_TIMEOUT_MS || config.request_timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS}"),
        });
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            var: "CODEWARS_BASE_URL".into(),
            reason: "must be an http(s) URL".into(),
        });
    }

    if config.data_dir.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DATA_DIR".into(),
            reason: "must not be empty".into(),
        });
    }

    if config.exercises_dir.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "EXERCISES_DIR".into(),
            reason: "must not be empty".into(),
        });
    }

    Ok(())
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: &[&str] = &[
        "DATA_DIR",
        "EXERCISES_DIR",
        "CODEWARS_BASE_URL",
        "REQUEST_TIMEOUT_MS",
        "LOG_LEVEL",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, DEFAULT_DATA_DIR);
        assert_eq!(config.exercises_dir, DEFAULT_EXERCISES_DIR);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("DATA_DIR", "/tmp/tutor-data");
        std::env::set_var("REQUEST_TIMEOUT_MS", "5000");
        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, "/tmp/tutor-data");
        assert_eq!(config.request_timeout_ms, 5000);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        std::env::set_var("REQUEST_TIMEOUT_MS", "not-a-number");
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "REQUEST_TIMEOUT_MS"
        ));
        clear_env();
    }

    #[test]
    fn test_validate_timeout_too_small() {
        let config = Config {
            request_timeout_ms: 10,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_timeout_too_large() {
        let config = Config {
            request_timeout_ms: MAX_TIMEOUT_MS + 1,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let config = Config {
            base_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "CODEWARS_BASE_URL"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_dirs() {
        let config = Config {
            data_dir: String::new(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            exercises_dir: String::new(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_default_passes_validation() {
        assert!(validate_config(&Config::default()).is_ok());
    }
}
