use reqwest::Method;
use sandwar_types::models::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_TIMEOUT_SECS};
use serde::Serialize;

use sandwar_types::ApiError;

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the community backend REST API.
    pub base_url: String,
    /// Deadline applied to every request, in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Resolve the backend origin the same way the gateway does:
    /// `SANDWAR_API_URL` when set and non-empty, else the fixed default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var(ENV_API_URL)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            timeout_secs: std::env::var(ENV_TIMEOUT_SECS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

/// Per-call request descriptor: method, header overrides, and an optional
/// pre-serialized body. Constructed per call site, consumed once.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Header overrides. Caller values win over the default
    /// `Content-Type: application/json` on key collision.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serialize `payload` as the JSON request body.
    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        self.body =
            Some(serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(self)
    }
}
