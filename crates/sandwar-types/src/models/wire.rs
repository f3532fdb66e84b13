//! Wire-level DTOs exchanged with the community backend.

use serde::{Deserialize, Serialize};

/// Fixed message the gateway returns when it cannot reach the backend at all.
/// Backend-originated error statuses are passed through untouched instead.
pub const PROXY_TRANSPORT_ERROR: &str = "An error occurred while processing the API request.";

/// Shape probed out of non-2xx backend bodies. The backend is not required
/// to send a `message` field, so everything is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of the gateway's own transport-failure response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyErrorBody {
    pub error: String,
}

impl ProxyErrorBody {
    pub fn transport_failure() -> Self {
        Self {
            error: PROXY_TRANSPORT_ERROR.to_string(),
        }
    }
}
