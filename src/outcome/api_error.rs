use crate::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed API call outcome.
///
/// `code` follows the backend's error code conventions, see
/// [`error_code`](crate::error_code) for the well known values. `payload`
/// optionally carries the structured error body the backend responded with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("API call failed with code '{code}': {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl AsRef<str>, message: impl AsRef<str>) -> Self {
        Self {
            code: code.as_ref().to_owned(),
            message: message.as_ref().to_owned(),
            payload: None,
        }
    }

    pub fn with_payload(
        code: impl AsRef<str>,
        message: impl AsRef<str>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            payload: Some(payload),
            ..Self::new(code, message)
        }
    }

    pub fn unknown() -> Self {
        Self::new(error_code::UNKNOWN, error_code::UNKNOWN_MESSAGE)
    }

    pub fn timeout() -> Self {
        Self::new(error_code::TIMEOUT, "Request timed out")
    }

    pub fn no_connection() -> Self {
        Self::new(error_code::NO_CONNECTION, error_code::NO_CONNECTION_MESSAGE)
    }

    /// Total mapping from any relay failure into an error payload, so that
    /// push style delivery can always invoke `on_error` with something
    /// meaningful.
    pub fn from_relay(error: RelayError) -> Self {
        match error {
            RelayError::Api { error } => error,
            RelayError::Executor { error } => Self::new(error_code::API_BLOCKED, error.to_string()),
            RelayError::Delivery { error } => Self::new(error_code::UNKNOWN, error.to_string()),
        }
    }
}
