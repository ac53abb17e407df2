//! JSON body extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use roster_core::validation::{Record, ValidationFailure};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

/// Plain JSON body whose rejections go through [`AppError`].
///
/// Used where validation happens in the service layer rather than while
/// binding.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// JSON body that has passed the registered constraints of `T`.
///
/// The raw JSON object is validated before it is deserialized, so a body
/// with a missing or wrongly-typed field is reported as a constraint
/// violation rather than a deserialization error:
///
/// ```ignore
/// async fn create(ValidatedJson(contact): ValidatedJson<CreateContact>) -> AppResult<String> {
///     Ok(format!("created {:?}", contact.uid))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest<AppState> for ValidatedJson<T>
where
    T: Record + DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;

        let Value::Object(fields) = body else {
            return Err(AppError::BadRequest(format!(
                "{} body must be a JSON object",
                T::RECORD_TYPE
            )));
        };

        let violations = state.validator.validate_fields(T::RECORD_TYPE, &fields, &[]);
        ValidationFailure::from_violations(violations).map_err(AppError::Binding)?;

        let record = serde_json::from_value(Value::Object(fields)).map_err(|e| {
            AppError::BadRequest(format!("Failed to parse {} body: {e}", T::RECORD_TYPE))
        })?;
        Ok(ValidatedJson(record))
    }
}
