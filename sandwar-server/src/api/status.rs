//! Gateway status handler.

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct GatewayStatusResponse {
    pub running: bool,
    pub port: u16,
    pub upstream: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<GatewayStatusResponse> {
    Json(GatewayStatusResponse {
        running: true,
        port: state.config.port,
        upstream: state.config.api_url.clone(),
    })
}
