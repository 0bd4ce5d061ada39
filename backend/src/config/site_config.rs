use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DIST_DIR: &str = "../frontend/dist";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("SITE_ADDR {value:?} is not a valid socket address: {reason}")]
    InvalidAddr { value: String, reason: String },
    #[error("SITE_DIST_DIR must not be empty")]
    EmptyDistDir,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    pub dist_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`; unset variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup("SITE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                reason: e.to_string(),
            })?;

        let dist_dir = lookup("SITE_DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());
        if dist_dir.trim().is_empty() {
            return Err(ConfigError::EmptyDistDir);
        }

        Ok(Self {
            addr,
            dist_dir: PathBuf::from(dist_dir.trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    }

    #[test]
    fn reads_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[("SITE_ADDR", "0.0.0.0:8080"), ("SITE_DIST_DIR", "/srv/site")])).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn rejects_bad_address() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { ref value, .. } if value == "localhost"));
    }

    #[test]
    fn rejects_empty_dist_dir() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_DIST_DIR", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyDistDir);
    }
}
