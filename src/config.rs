//! Runtime configuration read from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/games";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SCHEMA: &str = "public";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5100";

#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Schema holding the games, publishers and categories tables.
    pub schema: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub database: DatabaseConfig,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `GAMES_SCHEMA` and `BIND_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_MAX_CONNECTIONS",
                        reason: format!("expected a positive integer, got '{}'", raw),
                    })
                }
            },
        };

        let schema = lookup("GAMES_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into());
        if !is_identifier(&schema) {
            return Err(ConfigError::Invalid {
                key: "GAMES_SCHEMA",
                reason: format!("'{}' is not a valid PostgreSQL identifier", schema),
            });
        }

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr.parse().map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDR",
            reason: format!("'{}': {}", raw_addr, e),
        })?;

        Ok(ServerConfig {
            database: DatabaseConfig {
                url,
                max_connections,
                schema,
            },
            bind_addr,
        })
    }
}

/// Unquoted PostgreSQL identifier: letter or underscore, then letters, digits, underscores; max 63 bytes.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
