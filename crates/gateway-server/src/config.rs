//! Configuration for the gateway HTTP server.
//!
//! Values are layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. environment variables:
//!    - `GATEWAY_BIND_ADDR`  (default: "0.0.0.0")
//!    - `GATEWAY_PORT`       (default: "8000")
//!    - `GATEWAY_LOG_LEVEL`  (default: "info")
//! 4. command-line flags (applied in `main`)

use std::env;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IP address / interface to bind to (e.g. "0.0.0.0" or "127.0.0.1").
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Result<Self> {
        Config::default().with_overrides(|key| env::var(key).ok())
    }

    /// Read a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Config::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply `GATEWAY_*` overrides from `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("GATEWAY_BIND_ADDR") {
            self.bind_addr = addr;
        }
        self.port = read_or_default(&lookup, "GATEWAY_PORT", self.port)?;
        if let Some(level) = lookup("GATEWAY_LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(self)
    }

    /// Convenience: `addr:port` socket string.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn read_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(val) => val
            .parse::<T>()
            .map_err(|e| Error::Config(format!("{}={:?}: {}", key, val, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.socket_addr_string(), "0.0.0.0:8000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn env_overrides_apply() {
        let config = Config::default()
            .with_overrides(lookup_from(&[
                ("GATEWAY_BIND_ADDR", "127.0.0.1"),
                ("GATEWAY_PORT", "9090"),
                ("GATEWAY_LOG_LEVEL", "debug"),
            ]))
            .unwrap();
        assert_eq!(config.socket_addr_string(), "127.0.0.1:9090");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = Config::default()
            .with_overrides(lookup_from(&[("GATEWAY_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("port = 7000\n").unwrap();
        assert_eq!(config.port, 7000);
        assert_eq!(config.bind_addr, "0.0.0.0");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml_str("port = \"x\"").is_err());
    }
}
