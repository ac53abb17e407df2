use serde::{Deserialize, Serialize};

pub const RESULT_CODE_OK: i32 = 0;

/// Result envelope returned by operations that succeed with no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub is_successful: bool,
    pub result_code: i32,
    pub result_message: String,
}

impl Header {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            is_successful: true,
            result_code: RESULT_CODE_OK,
            result_message: message.into(),
        }
    }
}
