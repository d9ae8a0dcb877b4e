//! Runtime configuration from environment variables (optionally via `.env`).

use std::time::Duration;

/// Settings read once at startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// MySQL URL for the club database; without it the fixed roster is served.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Session shown on the page when the request does not name one.
    pub default_session: String,
    /// Row count every session is expected to return, if the club enforces one.
    pub expected_count: Option<usize>,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: None,
            db_max_connections: 5,
            default_session: "40".to_string(),
            expected_count: None,
            fetch_timeout: Duration::from_millis(5000),
        }
    }
}

impl Config {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset, blank or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();
        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database_url: get("DATABASE_URL"),
            db_max_connections: get("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db_max_connections),
            default_session: get("ROSTER_DEFAULT_SESSION").unwrap_or(defaults.default_session),
            expected_count: get("ROSTER_EXPECTED_COUNT").and_then(|v| v.parse().ok()),
            fetch_timeout: get("ROSTER_FETCH_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.fetch_timeout),
        }
    }
}
