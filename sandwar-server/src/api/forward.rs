//! Catch-all forwarding handlers for `/api/proxy/*path`.
//!
//! Each handler relays the incoming request to the configured backend origin
//! and returns the backend's status and body text verbatim. POST/PATCH
//! bodies travel as raw text to avoid re-serialization artifacts. Only a
//! transport-level failure reaching the backend is intercepted (fixed 500
//! response); backend error statuses pass through untouched so their
//! semantics survive end-to-end.

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::Method;

use sandwar_types::models::ProxyErrorBody;

use crate::state::AppState;

pub async fn forward_get(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    forward(&state, Method::GET, &path, query.as_deref(), None).await
}

pub async fn forward_post(
    State(state): State<AppState>,
    Path(path): Path<String>,
    body: String,
) -> Response {
    forward(&state, Method::POST, &path, None, Some(body)).await
}

pub async fn forward_patch(
    State(state): State<AppState>,
    Path(path): Path<String>,
    body: String,
) -> Response {
    forward(&state, Method::PATCH, &path, None, Some(body)).await
}

pub async fn forward_delete(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    forward(&state, Method::DELETE, &path, None, None).await
}

async fn forward(
    state: &AppState,
    method: Method,
    path: &str,
    query: Option<&str>,
    body: Option<String>,
) -> Response {
    let url = state.upstream_url(path, query);
    tracing::debug!(%method, %url, "forwarding to backend");

    let mut request = state
        .upstream
        .request(method, &url)
        .header(header::CONTENT_TYPE, "application/json")
        // The response must always reflect the backend's current state.
        .header(header::CACHE_CONTROL, "no-store");
    if let Some(body) = body {
        request = request.body(body);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => return transport_failure(&url, e),
    };

    let status = response.status().as_u16();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return transport_failure(&url, e),
    };
    let body = if text.is_empty() { "{}".to_string() } else { text };

    relay(status, body)
}

fn relay(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn transport_failure(url: &str, err: reqwest::Error) -> Response {
    tracing::error!(%url, error = %err, "backend unreachable");
    let body = serde_json::to_string(&ProxyErrorBody::transport_failure())
        .unwrap_or_else(|_| r#"{"error":"An error occurred while processing the API request."}"#.to_string());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
