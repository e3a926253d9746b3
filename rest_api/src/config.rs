// rest_api/src/config.rs

use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Server configuration, read from a TOML file named by `RECORDS_CONFIG`
/// (default `records.toml`). Every field has a default, so a missing file
/// yields a runnable local setup.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: i64,
    /// Seeded admin account. The password is hashed at startup and only the
    /// hash is kept in memory.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://data/records.sqlite".to_string()
}

fn default_session_ttl_secs() -> i64 {
    8 * 60 * 60
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            session_ttl_secs: default_session_ttl_secs(),
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
        }
    }
}

pub fn load_config() -> Result<ServerConfig> {
    let path =
        std::env::var("RECORDS_CONFIG").unwrap_or_else(|_| "records.toml".to_string());
    match fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {path}")),
        Err(_) => Ok(ServerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: ServerConfig = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.session_ttl_secs, 8 * 60 * 60);
    }
}
