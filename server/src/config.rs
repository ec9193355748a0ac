//! Environment-driven server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5003;

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address, from `HOST` and `PORT`.
    pub addr: SocketAddr,
    /// Permissive CORS on every route, from `TODO_CORS`.
    pub cors: bool,
    /// JSON log lines instead of human-readable ones, from `TODO_LOG_JSON`.
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            cors: true,
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source. Unset or empty variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let host = match get("HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
                var: "HOST",
                value: raw,
                expected: "IP address",
            })?,
            None => defaults.addr.ip(),
        };
        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw,
                expected: "port number",
            })?,
            None => defaults.addr.port(),
        };
        let cors = match get("TODO_CORS") {
            Some(raw) => parse_bool("TODO_CORS", raw)?,
            None => defaults.cors,
        };
        let log_json = match get("TODO_LOG_JSON") {
            Some(raw) => parse_bool("TODO_LOG_JSON", raw)?,
            None => defaults.log_json,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            cors,
            log_json,
        })
    }
}

fn parse_bool(var: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw,
            expected: "boolean",
        }),
    }
}
