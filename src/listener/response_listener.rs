use crate::prelude::*;

/// The notification contract for a single asynchronous API call producing
/// either a typed success value or an error.
///
/// A caller wishing to be notified creates an implementation, hands it to a
/// dispatching component, and receives exactly one of the two notifications
/// once the call completes. The contract itself is stateless; the at-most-once
/// discipline is upheld by the dispatching side, see
/// [`ApiDispatcher::call_with_listener`](crate::ApiDispatcher::call_with_listener).
///
/// Implementations should not block for long inside either method, they run
/// on whatever task drove the call to completion.
pub trait ResponseListener<T>: Send + Sync {
    /// The call completed successfully, `response` carries the decoded value.
    fn on_success(&self, response: ApiSuccess<T>);

    /// The call failed, `error` carries the failure code and message.
    fn on_error(&self, error: ApiError);
}

/// A [`ResponseListener`] built from a pair of closures, for callers that do
/// not want to define a named listener type.
pub struct FnListener<S, E> {
    on_success: S,
    on_error: E,
}

impl<S, E> FnListener<S, E> {
    pub fn new(on_success: S, on_error: E) -> Self {
        Self {
            on_success,
            on_error,
        }
    }
}

impl<T, S, E> ResponseListener<T> for FnListener<S, E>
where
    S: Fn(ApiSuccess<T>) + Send + Sync,
    E: Fn(ApiError) + Send + Sync,
{
    fn on_success(&self, response: ApiSuccess<T>) {
        (self.on_success)(response)
    }

    fn on_error(&self, error: ApiError) {
        (self.on_error)(error)
    }
}
