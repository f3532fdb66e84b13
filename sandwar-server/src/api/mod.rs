//! API Routes
//!
//! The forwarding surface plus gateway introspection.

mod forward;
mod status;


use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(status::get_status))
        .route(
            "/proxy/*path",
            get(forward::forward_get)
                .post(forward::forward_post)
                .patch(forward::forward_patch)
                .delete(forward::forward_delete),
        )
}
