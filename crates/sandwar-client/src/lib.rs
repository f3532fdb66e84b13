//! Client SDK for the Sandwar community backend.
//!
//! Every domain operation in the admin system (rosters, votes, lottery
//! draws, settings, ...) is a thin call through [`ApiClient`]: build the
//! endpoint path, optionally a query string via [`query::build_query_string`],
//! and let the client normalize the outcome into a typed result or a
//! [`sandwar_types::ApiError`].
//!
//! The client is stateless per request and re-entrant; there is no shared
//! mutable state, retry loop, or cache between calls. Callers that need
//! ordering sequence their own awaits.

mod client;
mod types;

pub mod query;

pub use client::ApiClient;
pub use query::{build_query_string, QueryValue};
pub use sandwar_types::{ApiError, ApiResult};
pub use types::{ClientConfig, RequestOptions};
