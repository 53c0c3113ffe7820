use serde::{Deserialize, Serialize};

/// A successful API call outcome, carrying the decoded value and an optional
/// human readable message from the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub data: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl AsRef<str>) -> Self {
        Self {
            data,
            message: Some(message.as_ref().to_owned()),
        }
    }
}
