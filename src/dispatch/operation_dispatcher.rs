use crate::prelude::*;

/// Bridges the executor's callback style completion into an awaitable
/// `Result`.
///
/// Each dispatch creates a fresh oneshot channel, wraps the sender in `L`'s
/// listener type, hands request and listener to the executor and awaits the
/// outcome. The operation is pending until the listener fires, then the
/// tagged outcome collapses into exactly one of the two result arms.
///
/// No timeout or cancellation policy lives here. Callers that need one wrap
/// the returned future themselves.
pub struct OperationDispatcher<L: IsOutcomeListener> {
    pub executor: Arc<dyn OperationExecutor<L>>,
}

impl<L: IsOutcomeListener> OperationDispatcher<L> {
    pub fn new(executor: Arc<dyn OperationExecutor<L>>) -> Self {
        Self { executor }
    }

    pub async fn dispatch(&self, request: L::Request) -> Result<L::Response, RelayError> {
        // Underlying oneshot channel carrying the outcome back to us.
        let (sender, receiver) = channel::<L::Outcome>();

        // The callback handed to the executor. It consumes `sender` on first
        // notification, which is what keeps delivery at-most-once.
        let listener = L::from(OutcomeNotifier::new(sender));

        self.executor.execute_request(request, listener)?;

        // Await the executor's notification. A closed channel means the
        // executor dropped the listener without ever notifying.
        let outcome = receiver
            .await
            .map_err(|_| DeliveryError::OutcomeChannelClosed)?;

        let result: Result<L::Response, L::Failure> = outcome.into();
        result.map_err(Into::into)
    }
}
