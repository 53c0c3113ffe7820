use crate::prelude::*;
use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};

/// The tagged outcome of a single API call, either a success carrying the
/// typed value or a failure carrying the error. Executors construct one of
/// the two variants and hand it to the listener, which guarantees the two
/// notification paths stay mutually exclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, EnumAsInner)]
pub enum ApiOutcome<T> {
    Success { value: ApiSuccess<T> },
    Failure { error: ApiError },
}

impl<T> ApiOutcome<T> {
    pub fn success(data: T) -> Self {
        Self::Success {
            value: ApiSuccess::new(data),
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self::Failure { error }
    }

    /// Consumes the outcome and invokes exactly one of the listener's two
    /// notification methods.
    pub fn deliver(self, listener: &dyn ResponseListener<T>) {
        match self {
            Self::Success { value } => listener.on_success(value),
            Self::Failure { error } => listener.on_error(error),
        }
    }
}

impl<T> From<ApiOutcome<T>> for Result<ApiSuccess<T>, ApiError> {
    fn from(outcome: ApiOutcome<T>) -> Self {
        match outcome {
            ApiOutcome::Success { value } => Ok(value),
            ApiOutcome::Failure { error } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn success_converts_into_ok() {
        let result: Result<ApiSuccess<u64>, ApiError> = ApiOutcome::success(7).into();
        assert_eq!(result, Ok(ApiSuccess::new(7)));
    }

    #[test]
    fn failure_converts_into_err() {
        let result: Result<ApiSuccess<u64>, ApiError> =
            ApiOutcome::failure(ApiError::unknown()).into();
        assert_eq!(result, Err(ApiError::unknown()));
    }

    #[test]
    fn deliver_invokes_exactly_one_path() {
        let success_calls = AtomicUsize::new(0);
        let error_calls = AtomicUsize::new(0);
        let listener = FnListener::new(
            |_: ApiSuccess<u64>| {
                success_calls.fetch_add(1, Ordering::SeqCst);
            },
            |_: ApiError| {
                error_calls.fetch_add(1, Ordering::SeqCst);
            },
        );

        ApiOutcome::success(1).deliver(&listener);
        assert_eq!(success_calls.load(Ordering::SeqCst), 1);
        assert_eq!(error_calls.load(Ordering::SeqCst), 0);

        ApiOutcome::failure(ApiError::timeout()).deliver(&listener);
        assert_eq!(success_calls.load(Ordering::SeqCst), 1);
        assert_eq!(error_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn accessors_follow_the_tag() {
        let outcome = ApiOutcome::success("ready".to_owned());
        assert!(outcome.is_success());
        assert!(outcome.as_failure().is_none());
    }
}
