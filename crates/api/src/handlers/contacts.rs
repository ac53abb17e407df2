//! Handlers for the `/contacts` resource.

use axum::extract::State;
use axum::Json;
use roster_core::models::{CreateContact, DeleteContacts, Header};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /contacts
///
/// The body is validated while it is bound, then again by the service.
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(contact): ValidatedJson<CreateContact>,
) -> AppResult<&'static str> {
    state.contacts.create_contact(&contact)?;
    Ok("success")
}

/// DELETE /contacts
pub async fn delete_contacts(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DeleteContacts>,
) -> AppResult<Json<Header>> {
    let count = state.contacts.delete_contacts(&request)?;
    Ok(Json(Header::success(format!("{count} contact(s) deleted"))))
}
