//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::telemetry::TelemetryConfig;

/// Database name used when `MONGODB_DATABASE` is unset.
pub const DEFAULT_DATABASE: &str = "api-20v";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `MONGODB_URI` is unset; the server then runs in-memory.
    pub store: Option<StoreConfig>,
    pub telemetry: TelemetryConfig,
}

/// Document store settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    /// `per-request` or `shared`.
    pub connection_mode: String,
    pub server_selection_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let store = get("MONGODB_URI").map(|uri| StoreConfig {
            uri,
            database: get("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            connection_mode: get("MONGODB_CONNECTION_MODE")
                .unwrap_or_else(|| "per-request".to_string()),
            server_selection_timeout: Duration::from_secs(
                get("MONGODB_SERVER_SELECTION_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        });

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            store,
            telemetry: TelemetryConfig {
                json_logs: get("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_store() {
        let config = config(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.store.is_none());
        assert!(!config.telemetry.json_logs);
    }

    #[test]
    fn test_store_settings() {
        let config = config(&[
            ("MONGODB_URI", "mongodb://localhost:27015/"),
            ("MONGODB_CONNECTION_MODE", "shared"),
            ("MONGODB_SERVER_SELECTION_TIMEOUT_SECS", "2"),
            ("PORT", "9000"),
            ("LOG_FORMAT", "JSON"),
        ]);

        let store = config.store.unwrap();
        assert_eq!(store.uri, "mongodb://localhost:27015/");
        assert_eq!(store.database, DEFAULT_DATABASE);
        assert_eq!(store.connection_mode, "shared");
        assert_eq!(store.server_selection_timeout, Duration::from_secs(2));
        assert_eq!(config.port, 9000);
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        assert_eq!(config(&[("PORT", "http")]).port, 8080);
    }
}
