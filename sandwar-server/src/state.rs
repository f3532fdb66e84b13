//! Shared application state for the gateway.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sandwar_types::GatewayConfig;

/// Immutable per-process state handed to every handler.
///
/// The upstream `reqwest::Client` pools connections internally; handlers
/// never coordinate through any other shared resource.
#[derive(Clone)]
pub struct AppState {
    pub upstream: reqwest::Client,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let upstream = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            upstream,
            config: Arc::new(config),
        })
    }

    /// Target URL for a forwarded request: backend origin + wildcard path,
    /// with the caller's query string reattached verbatim.
    pub fn upstream_url(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}
