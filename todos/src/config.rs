//! Configuration management for the todolist binary.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Values that don't parse fall back to the default.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use todolist_runtime::StoreConfig;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todolist=debug,todolist_runtime=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the todo API; `None` starts the in-process fake API
    pub api_url: Option<String>,
    /// Bind address of the in-process fake API
    pub fake_api_addr: SocketAddr,
    /// Buffer size of the store's action broadcast
    pub action_broadcast_capacity: usize,
    /// How long shutdown waits for in-flight effects, in seconds
    pub shutdown_timeout_secs: u64,
    /// Log filter (`RUST_LOG` syntax)
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            api_url: lookup("TODO_API_URL").filter(|url| !url.trim().is_empty()),
            fake_api_addr: lookup("FAKE_API_ADDR")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.fake_api_addr),
            action_broadcast_capacity: lookup("ACTION_BROADCAST_CAPACITY")
                .and_then(|s| s.parse().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.action_broadcast_capacity),
            shutdown_timeout_secs: lookup("SHUTDOWN_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.shutdown_timeout_secs),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }

    /// Shutdown timeout as a `Duration`
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.action_broadcast_capacity, self.shutdown_timeout())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            fake_api_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            action_broadcast_capacity: 16,
            shutdown_timeout_secs: 5,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);

        assert_eq!(config.api_url, None);
        assert_eq!(config.fake_api_addr.port(), 0);
        assert_eq!(config.action_broadcast_capacity, 16);
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(5));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("TODO_API_URL", "http://todos.internal:8080"),
            ("FAKE_API_ADDR", "0.0.0.0:3000"),
            ("ACTION_BROADCAST_CAPACITY", "64"),
            ("SHUTDOWN_TIMEOUT_SECS", "1"),
            ("RUST_LOG", "warn"),
        ]);

        assert_eq!(config.api_url.as_deref(), Some("http://todos.internal:8080"));
        assert_eq!(config.fake_api_addr.port(), 3000);
        assert_eq!(config.store_config().broadcast_capacity, 64);
        assert_eq!(config.store_config().default_shutdown_timeout, Duration::from_secs(1));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = config_from(&[
            ("FAKE_API_ADDR", "nowhere"),
            ("ACTION_BROADCAST_CAPACITY", "0"),
            ("SHUTDOWN_TIMEOUT_SECS", "soon"),
            ("TODO_API_URL", "  "),
        ]);

        assert_eq!(config.api_url, None);
        assert_eq!(config.fake_api_addr.port(), 0);
        assert_eq!(config.action_broadcast_capacity, 16);
        assert_eq!(config.shutdown_timeout_secs, 5);
    }
}
