//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `postgres://localhost/memos` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8081` |
//! | `ALLOWED_ORIGINS` | `http://localhost:3000` |
//! | `RATE_LIMIT_ENABLED` | `true` |
//! | `RATE_LIMIT_REQUESTS` | `100` |
//! | `RATE_LIMIT_PERIOD_SECS` | `60` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `MAX_BODY_BYTES` | `1048576` |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use memos_core::{Error, Result};

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/memos";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";
pub const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 100;
pub const DEFAULT_RATE_LIMIT_PERIOD_SECS: u64 = 60;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Global rate limit settings. `None` on [`ServerConfig`] disables limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests: u32,
    pub period: Duration,
}

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
    pub rate_limit: Option<RateLimitConfig>,
    pub db_max_connections: u32,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: parse_allowed_origins(DEFAULT_ALLOWED_ORIGINS),
            rate_limit: Some(RateLimitConfig {
                requests: DEFAULT_RATE_LIMIT_REQUESTS,
                period: Duration::from_secs(DEFAULT_RATE_LIMIT_PERIOD_SECS),
            }),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);
        let rate_limit = if rate_limit_enabled {
            let requests = parse_or(
                &lookup,
                "RATE_LIMIT_REQUESTS",
                DEFAULT_RATE_LIMIT_REQUESTS,
            );
            let period_secs = parse_or(
                &lookup,
                "RATE_LIMIT_PERIOD_SECS",
                DEFAULT_RATE_LIMIT_PERIOD_SECS,
            );
            Some(RateLimitConfig {
                requests: requests.max(1),
                period: Duration::from_secs(period_secs.max(1)),
            })
        } else {
            None
        };

        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            allowed_origins: parse_allowed_origins(
                &lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            rate_limit,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid HOST/PORT: {}", e)))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, "Invalid config value, using default");
                default
            }
        },
        None => default,
    }
}

/// Parse allowed CORS origins from a comma-separated list.
///
/// Invalid entries are skipped with a warning. An empty list falls back to
/// [`DEFAULT_ALLOWED_ORIGINS`].
pub fn parse_allowed_origins(origins: &str) -> Vec<HeaderValue> {
    let parsed: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect();

    if parsed.is_empty() {
        return vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGINS)];
    }
    parsed
}
