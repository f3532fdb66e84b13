//! Gateway configuration, loaded once from the environment at startup and
//! treated as immutable for the process lifetime.

use serde::{Deserialize, Serialize};

/// Backend origin the gateway forwards to and the client calls.
pub const ENV_API_URL: &str = "SANDWAR_API_URL";
/// Bind host for the gateway daemon.
pub const ENV_HOST: &str = "SANDWAR_HOST";
/// Bind port for the gateway daemon.
pub const ENV_PORT: &str = "SANDWAR_PORT";
/// Outbound request deadline in seconds.
pub const ENV_TIMEOUT_SECS: &str = "SANDWAR_TIMEOUT_SECS";

/// Fallback backend origin used when `SANDWAR_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8090;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the gateway daemon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Origin of the community backend REST API (no trailing slash required).
    pub api_url: String,
    /// Address the gateway binds to.
    pub host: String,
    /// Port the gateway binds to.
    pub port: u16,
    /// Deadline for each forwarded request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset or empty variables fall back to defaults, as do unparseable
    /// numeric values. Misconfiguration never aborts startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            api_url: non_empty(ENV_API_URL).unwrap_or(defaults.api_url),
            host: non_empty(ENV_HOST).unwrap_or(defaults.host),
            port: non_empty(ENV_PORT)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            request_timeout_secs: non_empty(ENV_TIMEOUT_SECS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn unset_environment_yields_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn environment_overrides_every_field() {
        let config = GatewayConfig::from_lookup(lookup(&[
            (ENV_API_URL, "http://backend.example:9000"),
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, "3100"),
            (ENV_TIMEOUT_SECS, "5"),
        ]));
        assert_eq!(config.api_url, "http://backend.example:9000");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3100);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[
            (ENV_PORT, "not-a-port"),
            (ENV_TIMEOUT_SECS, "-3"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn empty_values_are_treated_as_unset() {
        let config = GatewayConfig::from_lookup(lookup(&[(ENV_API_URL, "")]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
