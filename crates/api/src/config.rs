use std::fmt::Display;
use std::str::FromStr;

use todo_db::PoolConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database connection string and pool bounds.
    pub pool: PoolConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `DATABASE_URL`            | required                |
    /// | `DB_POOL_MIN`             | `1`                     |
    /// | `DB_POOL_MAX`             | `10`                    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`                    |
    ///
    /// Panics on a missing `DATABASE_URL` or an unparsable value; bad
    /// configuration should stop the process before it binds.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16);

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64);

        let database_url = lookup("DATABASE_URL").expect("DATABASE_URL must be set");
        let defaults = PoolConfig::new(database_url);
        let min_connections = parse_or(&lookup, "DB_POOL_MIN", defaults.min_connections);
        let max_connections = parse_or(&lookup, "DB_POOL_MAX", defaults.max_connections);
        assert!(
            min_connections <= max_connections,
            "DB_POOL_MIN ({min_connections}) must not exceed DB_POOL_MAX ({max_connections})"
        );
        let acquire_timeout_secs = parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout_secs,
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            pool: PoolConfig {
                min_connections,
                max_connections,
                acquire_timeout_secs,
                ..defaults
            },
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid {}: {e}", std::any::type_name::<T>())),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = ServerConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/todo",
        )]));

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.pool.database_url, "postgres://localhost/todo");
        assert_eq!(config.pool.min_connections, 1);
        assert_eq!(config.pool.max_connections, 10);
    }

    #[test]
    fn overrides_apply() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/todo"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("DB_POOL_MIN", "2"),
            ("DB_POOL_MAX", "4"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.pool.min_connections, 2);
        assert_eq!(config.pool.max_connections, 4);
        assert_eq!(config.pool.acquire_timeout_secs, 5);
    }

    #[test]
    #[should_panic(expected = "DATABASE_URL must be set")]
    fn missing_database_url_panics() {
        ServerConfig::from_lookup(lookup_from(&[]));
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn bad_port_panics() {
        ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/todo"),
            ("PORT", "eighty"),
        ]));
    }

    #[test]
    #[should_panic(expected = "must not exceed DB_POOL_MAX")]
    fn inverted_pool_bounds_panic() {
        ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/todo"),
            ("DB_POOL_MIN", "5"),
            ("DB_POOL_MAX", "2"),
        ]));
    }
}
