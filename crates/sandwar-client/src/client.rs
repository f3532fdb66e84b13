use std::time::Duration;

use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use sandwar_types::models::ErrorBody;
use sandwar_types::{ApiError, ApiResult};

use crate::types::{ClientConfig, RequestOptions};

/// HTTP client for the community backend REST API.
///
/// Holds a configured [`reqwest::Client`] and nothing else. Every call is
/// independent; outcomes are normalized into [`ApiError`] so callers branch
/// on variants (and the attached status code) instead of message strings.
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Construct a client from `SANDWAR_API_URL` / `SANDWAR_TIMEOUT_SECS`,
    /// falling back to the fixed defaults.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a request against a relative endpoint path and normalize the
    /// outcome.
    ///
    /// - transport failure → [`ApiError::Transport`], or [`ApiError::Timeout`]
    ///   when the configured deadline elapsed
    /// - 204 → empty JSON object, body untouched
    /// - other 2xx → body parsed as JSON; invalid JSON → [`ApiError::Decode`]
    /// - non-2xx → [`ApiError::Http`] carrying the status and the body's
    ///   `message` field when present
    pub async fn fetch(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Value> {
        let url = join_url(&self.config.base_url, endpoint);
        tracing::debug!(method = %options.method, %url, "API request");

        let mut request = self
            .http
            .request(options.method, &url)
            .headers(build_headers(&options.headers));
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.normalize_transport(e))?;

        let status = response.status();
        if status.is_success() {
            if status == StatusCode::NO_CONTENT {
                return Ok(Value::Object(serde_json::Map::new()));
            }
            let text = response
                .text()
                .await
                .map_err(|e| self.normalize_transport(e))?;
            return serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message);
        let err = ApiError::http(status.as_u16(), message);
        tracing::warn!(status = status.as_u16(), %url, "API request failed");
        Err(err)
    }

    /// [`Self::fetch`] plus deserialization into the caller's type.
    /// A shape mismatch is a [`ApiError::Decode`], caught at the boundary
    /// instead of propagating malformed data into domain state.
    pub async fn fetch_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let value = self.fetch(endpoint, options).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        self.fetch(endpoint, RequestOptions::default()).await
    }

    pub async fn get_as<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.fetch_as(endpoint, RequestOptions::default()).await
    }

    pub async fn post<B: Serialize>(&self, endpoint: &str, payload: &B) -> ApiResult<Value> {
        self.fetch(endpoint, RequestOptions::new(Method::POST).json(payload)?)
            .await
    }

    pub async fn patch<B: Serialize>(&self, endpoint: &str, payload: &B) -> ApiResult<Value> {
        self.fetch(endpoint, RequestOptions::new(Method::PATCH).json(payload)?)
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> ApiResult<Value> {
        self.fetch(endpoint, RequestOptions::new(Method::DELETE))
            .await
    }

    fn normalize_transport(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.config.timeout_secs)
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Resolve an absolute URL from the configured origin and a relative
/// endpoint. Tolerant of a trailing slash on the base and a missing leading
/// slash on the endpoint.
fn join_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// Default JSON headers merged with caller overrides; caller values win on
/// key collision. Entries that are not valid header names/values are skipped.
fn build_headers(extra: &[(String, String)]) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    for (name, value) in extra {
        if let Ok(name) = header::HeaderName::from_bytes(name.as_bytes()) {
            if let Ok(value) = header::HeaderValue::from_str(value) {
                headers.insert(name, value);
            }
        }
    }
    headers
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slash_variants() {
        assert_eq!(
            join_url("http://backend:8080", "/wars"),
            "http://backend:8080/wars"
        );
        assert_eq!(
            join_url("http://backend:8080/", "/wars"),
            "http://backend:8080/wars"
        );
        assert_eq!(
            join_url("http://backend:8080", "wars"),
            "http://backend:8080/wars"
        );
    }

    #[test]
    fn default_content_type_is_json() {
        let headers = build_headers(&[]);
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn caller_headers_win_on_collision() {
        let headers = build_headers(&[
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("X-War-Season".to_string(), "12".to_string()),
        ]);
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get("x-war-season").unwrap(), "12");
    }

    #[test]
    fn invalid_header_entries_are_skipped() {
        let headers = build_headers(&[("bad name".to_string(), "v".to_string())]);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
    }
}
