//! Test helpers for sandwar-server unit tests.

use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;

use sandwar_types::GatewayConfig;

use crate::state::AppState;

/// Build an `AppState` pointed at the given backend origin, with a short
/// request deadline so transport-failure tests stay fast.
pub fn test_state(api_url: &str) -> AppState {
    AppState::new(GatewayConfig {
        api_url: api_url.to_string(),
        request_timeout_secs: 5,
        ..GatewayConfig::default()
    })
    .expect("failed to create test AppState")
}

/// Start a mock community backend on an ephemeral port and return its origin.
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route(
            "/echo",
            get(|RawQuery(query): RawQuery| async move { Json(json!({"query": query})) }),
        )
        .route("/empty", get(|| async { (StatusCode::OK, String::new()) }))
        .route(
            "/teapot",
            get(|| async {
                (
                    StatusCode::IM_A_TEAPOT,
                    Json(json!({"message": "short and stout"})),
                )
            }),
        )
        .route(
            "/echo-body",
            post(|body: String| async move { (StatusCode::CREATED, body) })
                .patch(|body: String| async move { (StatusCode::OK, body) }),
        )
        .route("/gone", delete(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/echo-headers",
            get(|headers: HeaderMap| async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                };
                Json(json!({
                    "content_type": header("content-type"),
                    "cache_control": header("cache-control"),
                }))
            }),
        )
        .route(
            "/wars/42/roster",
            get(|| async { Json(json!({"squads": ["alpha", "bravo"]})) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });
    format!("http://{addr}")
}

/// An origin with nothing listening behind it, for transport-failure tests.
pub async fn unreachable_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
