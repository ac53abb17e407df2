//! Route definitions for the `/messages` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST   /     -> send_message
/// POST   /ad   -> send_ad_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(messages::send_message))
        .route("/ad", post(messages::send_ad_message))
}
