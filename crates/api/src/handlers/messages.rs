//! Handlers for the `/messages` resource.
//!
//! These bind the body with [`AppJson`] and leave validation to
//! [`MessageService`](roster_core::service::MessageService), so failures here
//! come from the service layer rather than from body binding.

use axum::extract::State;
use axum::Json;
use roster_core::models::{Header, Message};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /messages
///
/// Ad rules apply when the message sets `isAd`.
pub async fn send_message(
    State(state): State<AppState>,
    AppJson(message): AppJson<Message>,
) -> AppResult<Json<Header>> {
    state.messages.send_message(&message)?;
    Ok(Json(Header::success("sent")))
}

/// POST /messages/ad
///
/// Ad rules always apply.
pub async fn send_ad_message(
    State(state): State<AppState>,
    AppJson(message): AppJson<Message>,
) -> AppResult<Json<Header>> {
    state.messages.send_ad_message(&message)?;
    Ok(Json(Header::success("sent")))
}
