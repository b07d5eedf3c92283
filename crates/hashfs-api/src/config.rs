//! # Server Configuration
//!
//! Read from the environment:
//!
//! | Variable              | Default | Meaning                                |
//! |-----------------------|---------|----------------------------------------|
//! | `PORT`                | `8080`  | HTTP listen port                       |
//! | `HASHFS_ROOT`         | `.`     | Directory served as the store root     |
//! | `HASHFS_METRICS_PORT` | unset   | Prometheus exporter port, when set     |

use std::path::PathBuf;

use thiserror::Error;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A port variable did not parse as a `u16`.
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Asset server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Directory served as the store root.
    pub root: PathBuf,
    /// Port for the Prometheus exporter; metrics are not exported when unset.
    pub metrics_port: Option<u16>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
            metrics_port: None,
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(v) => parse_port("PORT", v)?,
            None => DEFAULT_PORT,
        };
        let metrics_port = lookup("HASHFS_METRICS_PORT")
            .map(|v| parse_port("HASHFS_METRICS_PORT", v))
            .transpose()?;
        let root = lookup("HASHFS_ROOT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            port,
            root,
            metrics_port,
        })
    }
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("HASHFS_ROOT", "/srv/static"),
            ("HASHFS_METRICS_PORT", "9100"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.root, PathBuf::from("/srv/static"));
        assert_eq!(cfg.metrics_port, Some(9100));
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                var: "PORT",
                value: "http".to_string()
            }
        );
        assert!(AppConfig::from_lookup(lookup(&[("HASHFS_METRICS_PORT", "70000")])).is_err());
    }
}
