//! Route definitions for the `/contacts` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// POST   /   -> create_contact
/// DELETE /   -> delete_contacts
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(contacts::create_contact).delete(contacts::delete_contacts),
    )
}
