pub mod contacts;
pub mod health;
pub mod messages;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /contacts          create (POST), delete (DELETE)
/// /messages          send, ad rules follow `isAd` (POST)
/// /messages/ad       send as advertisement (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contacts", contacts::router())
        .nest("/messages", messages::router())
}
