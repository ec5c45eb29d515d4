//! Server configuration.
//!
//! Values come from the environment and can be overridden by CLI flags:
//! - `MCP_COLAB_API_SECRET`: shared secret for `/analyze` (blank disables auth)
//! - `MEEZ_ANALYZER_ADDR`: bind address, default `127.0.0.1:8000`

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const SECRET_ENV: &str = "MCP_COLAB_API_SECRET";
pub const ADDR_ENV: &str = "MEEZ_ANALYZER_ADDR";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Trimmed, non-empty secret; `None` means requests are not checked
    pub api_secret: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(addr) = lookup(ADDR_ENV) {
            config = config.with_bind_addr(&addr)?;
        }
        if let Some(secret) = lookup(SECRET_ENV) {
            config = config.with_api_secret(secret);
        }
        Ok(config)
    }

    pub fn with_bind_addr(mut self, addr: &str) -> Result<Self, ConfigError> {
        let addr = addr.trim();
        self.bind_addr = addr.parse().map_err(|source| ConfigError::InvalidBindAddr {
            value: addr.to_string(),
            source,
        })?;
        Ok(self)
    }

    pub fn with_api_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        let secret = secret.trim();
        self.api_secret = (!secret.is_empty()).then(|| secret.to_string());
        self
    }

    pub fn auth_enabled(&self) -> bool {
        self.api_secret.is_some()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            api_secret: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.api_secret, None);
        assert!(!config.auth_enabled());
    }

    #[test]
    fn test_secret_is_trimmed() {
        let config = load(&[(SECRET_ENV, "  s3cret \n")]).unwrap();
        assert_eq!(config.api_secret.as_deref(), Some("s3cret"));
        assert!(config.auth_enabled());
    }

    #[test]
    fn test_blank_secret_disables_auth() {
        let config = load(&[(SECRET_ENV, "   ")]).unwrap();
        assert_eq!(config.api_secret, None);
    }

    #[test]
    fn test_bind_addr_from_env() {
        let config = load(&[(ADDR_ENV, "0.0.0.0:9090")]).unwrap();
        assert_eq!(config.bind_addr.port(), 9090);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let result = load(&[(ADDR_ENV, "localhost")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBindAddr { ref value, .. }) if value == "localhost"
        ));
    }
}
