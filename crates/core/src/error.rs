use crate::validation::report::ValidationFailure;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
