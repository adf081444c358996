//! Environment-driven gateway configuration.

use std::net::SocketAddr;

/// Environment variable naming the address the gateway binds to.
pub const LISTEN_ADDR_VAR: &str = "MERGINGTON_LISTEN_ADDR";

/// Address used when [`LISTEN_ADDR_VAR`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Errors raised while reading gateway configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The listen address could not be parsed as `host:port`.
    #[error("invalid {var} '{value}': {source}")]
    InvalidListenAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the HTTP gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the listener binds to.
    pub listen_addr: SocketAddr,
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if the listen address is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if the listen address is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                var: LISTEN_ADDR_VAR,
                value: value.clone(),
                source,
            })?;
        Ok(Self { listen_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_falls_back_to_default() {
        let config = match GatewayConfig::from_lookup(|_| None) {
            Ok(c) => c,
            Err(e) => panic!("default config must parse: {e}"),
        };
        assert_eq!(config.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn explicit_addr_is_used() {
        let config = match GatewayConfig::from_lookup(|_| Some("0.0.0.0:9090".to_owned())) {
            Ok(c) => c,
            Err(e) => panic!("explicit config must parse: {e}"),
        };
        assert_eq!(config.listen_addr.port(), 9090);
        assert!(config.listen_addr.ip().is_unspecified());
    }

    #[test]
    fn malformed_addr_is_rejected() {
        let err = match GatewayConfig::from_lookup(|_| Some("not-an-address".to_owned())) {
            Ok(c) => panic!("malformed address must fail, got {c:?}"),
            Err(e) => e,
        };
        let msg = err.to_string();
        assert!(msg.contains(LISTEN_ADDR_VAR), "error must name the variable: {msg}");
        assert!(msg.contains("not-an-address"), "error must echo the value: {msg}");
    }
}
