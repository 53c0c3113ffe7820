use crate::prelude::*;

/// Listener binding for API calls producing an [`ApiOutcome<T>`].
///
/// `Req` is whatever request descriptor the installed executor understands.
/// The relay never inspects it, building requests is the embedding
/// application's concern.
pub struct ApiOutcomeListener<Req, T> {
    notifier: OutcomeNotifier<ApiOutcome<T>>,
    request: PhantomData<fn() -> Req>,
}

impl<Req: Send, T: Send> IsOutcomeListener for ApiOutcomeListener<Req, T> {
    type Request = Req;
    type Response = ApiSuccess<T>;
    type Failure = ApiError;
    type Outcome = ApiOutcome<T>;
}

impl<Req, T> From<OutcomeNotifier<ApiOutcome<T>>> for ApiOutcomeListener<Req, T> {
    fn from(notifier: OutcomeNotifier<ApiOutcome<T>>) -> Self {
        Self {
            notifier,
            request: PhantomData,
        }
    }
}

impl<Req, T> ApiOutcomeListener<Req, T> {
    /// Called by the executor when the call has finished, with the outcome.
    pub fn notify_outcome(&self, outcome: ApiOutcome<T>) {
        self.notifier.notify_outcome(outcome)
    }
}
