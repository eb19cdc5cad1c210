//! Configuration management for the Unda portal client.
//!
//! This module handles loading and validating configuration from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the Unda portal client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal API base URL
    pub portal_api_url: String,

    /// Optional bearer token attached to requests
    pub access_token: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `PORTAL_API_BASE_URL`: Base URL for the portal API
    ///
    /// Optional environment variables:
    /// - `PORTAL_ACCESS_TOKEN`: Bearer token for authenticated endpoints
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let portal_api_url = env::var("PORTAL_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("PORTAL_API_BASE_URL".to_string()))?;

        // Validate API URL format
        if !portal_api_url.starts_with("http://") && !portal_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "PORTAL_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let access_token = env::var("PORTAL_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            portal_api_url,
            access_token,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            portal_api_url: String::new(),
            access_token: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.log_level, "error");
        assert!(config.access_token.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("PORTAL_API_BASE_URL", "not-a-url");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "PORTAL_API_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("PORTAL_API_BASE_URL", "https://portal.example.org");
        guard.set("REQUEST_TIMEOUT", "30");

        let result = Config::from_env();
        assert!(
            result.is_ok(),
            "Config should be valid with all required fields set: {:?}",
            result.err()
        );

        let config = result.unwrap();
        assert_eq!(config.portal_api_url, "https://portal.example.org");
        assert_eq!(config.request_timeout, 30);
    }

    #[test]
    #[serial]
    fn test_config_blank_access_token_ignored() {
        let mut guard = EnvGuard::new();
        guard.set("PORTAL_API_BASE_URL", "https://portal.example.org");
        guard.set("PORTAL_ACCESS_TOKEN", "   ");

        let config = Config::from_env().unwrap();
        assert!(config.access_token.is_none());
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        let result = Config::parse_env_u64("TEST_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        let result = Config::parse_env_u64("TEST_U64_INVALID", 10);
        assert!(result.is_err());
    }
}
