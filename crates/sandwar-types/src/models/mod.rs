//! Shared data structures for the Sandwar gateway and client.

mod config;
mod wire;

pub use config::{
    GatewayConfig, DEFAULT_API_URL, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, ENV_API_URL,
    ENV_HOST, ENV_PORT, ENV_TIMEOUT_SECS,
};
pub use wire::{ErrorBody, ProxyErrorBody, PROXY_TRANSPORT_ERROR};
