//! # Sandwar Types
//!
//! Shared types for the Sandwar gateway and client SDK.
//!
//! - **`error`** - The normalized `ApiError` taxonomy every caller branches on
//! - **`models`** - Configuration and wire-level DTOs
//!
//! ## Architecture Role
//!
//! `sandwar-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          sandwar-types (this crate)
//!                  │
//!         ┌────────┴────────┐
//!         ▼                 ▼
//!   sandwar-client    sandwar-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for API responses
//! - **Clone** for cheap sharing across async boundaries
//! - **Matchable** for error handling logic via enum variants

pub mod error;
pub mod models;

pub use error::{ApiError, ApiResult};
pub use models::{ErrorBody, GatewayConfig, ProxyErrorBody};
