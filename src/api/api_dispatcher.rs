use crate::prelude::*;

/// Typed facade over [`OperationDispatcher`] for API calls.
///
/// Offers the completion in both styles the SDK supports: `call` returns an
/// awaitable `Result`, `call_with_listener` pushes the outcome into a
/// [`ResponseListener`], firing exactly one of its two notification methods
/// per call.
pub struct ApiDispatcher<Req: Send, T: Send> {
    dispatcher: OperationDispatcher<ApiOutcomeListener<Req, T>>,
    error_listener: Option<Arc<dyn ErrorListener>>,
}

impl<Req: Send, T: Send> ApiDispatcher<Req, T> {
    pub fn new(executor: Arc<dyn OperationExecutor<ApiOutcomeListener<Req, T>>>) -> Self {
        Self {
            dispatcher: OperationDispatcher::new(executor),
            error_listener: None,
        }
    }

    /// Installs a hook observing every failed call, on top of whatever the
    /// per call listener does with the error.
    pub fn with_error_listener(mut self, error_listener: Arc<dyn ErrorListener>) -> Self {
        self.error_listener = Some(error_listener);
        self
    }

    pub async fn call(&self, request: Req) -> Result<ApiSuccess<T>, RelayError> {
        let result = self.dispatcher.dispatch(request).await;
        match &result {
            Ok(_) => debug!("API call delivered successfully."),
            Err(error) => {
                warn!(%error, "API call failed.");
                if let Some(error_listener) = &self.error_listener {
                    error_listener.on_error(error, "ApiDispatcher::call");
                }
            }
        }
        result
    }

    /// Push style completion, exactly one of the listener's `on_success` and
    /// `on_error` methods is invoked once the call finishes. Relay machinery
    /// failures reach `on_error` mapped through [`ApiError::from_relay`].
    pub async fn call_with_listener(&self, request: Req, listener: &dyn ResponseListener<T>) {
        let outcome = match self.call(request).await {
            Ok(value) => ApiOutcome::Success { value },
            Err(error) => ApiOutcome::failure(ApiError::from_relay(error)),
        };
        outcome.deliver(listener)
    }
}
