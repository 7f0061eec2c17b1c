//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. The portal keeps no state of its own beyond the in-memory catalog
//! and submission queue, so there are no required variables.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from `X-Forwarded-For` / `X-Real-IP`
//!   (default: `false`; enable only behind a trusted reverse proxy)
//! - `SUBMISSION_QUEUE_CAPACITY` - Onboarding hand-off buffer size
//!   (default: 1024, min: 16)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Buffer size of the channel between the onboarding handler and the
    /// background submission worker.
    pub submission_queue_capacity: usize,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let submission_queue_capacity = env::var("SUBMISSION_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            submission_queue_capacity,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `submission_queue_capacity` is outside `[16, 100000]`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.submission_queue_capacity < 16 {
            anyhow::bail!(
                "SUBMISSION_QUEUE_CAPACITY must be at least 16, got {}",
                self.submission_queue_capacity
            );
        }

        if self.submission_queue_capacity > 100_000 {
            anyhow::bail!(
                "SUBMISSION_QUEUE_CAPACITY is too large (max: 100000), got {}",
                self.submission_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  Submission queue capacity: {}",
            self.submission_queue_capacity
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            submission_queue_capacity: 1024,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Test queue capacity bounds
        config.submission_queue_capacity = 8;
        assert!(config.validate().is_err());

        config.submission_queue_capacity = 200_000;
        assert!(config.validate().is_err());

        config.submission_queue_capacity = 1024;

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("BEHIND_PROXY", "true");
            env::set_var("SUBMISSION_QUEUE_CAPACITY", "64");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert!(config.behind_proxy);
        assert_eq!(config.submission_queue_capacity, 64);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BEHIND_PROXY");
            env::remove_var("SUBMISSION_QUEUE_CAPACITY");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BEHIND_PROXY");
            env::remove_var("SUBMISSION_QUEUE_CAPACITY");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert!(!config.behind_proxy);
        assert_eq!(config.submission_queue_capacity, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_invalid_capacity_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SUBMISSION_QUEUE_CAPACITY", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.submission_queue_capacity, 1024);

        unsafe {
            env::remove_var("SUBMISSION_QUEUE_CAPACITY");
        }
    }
}
