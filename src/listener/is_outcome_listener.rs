use crate::prelude::*;

/// Type-level binding of a concrete listener to the request, response,
/// failure and outcome types of the operations it listens for.
///
/// A listener is created from an [`OutcomeNotifier`] by the dispatcher, handed
/// to the executor together with the request, and notified with a tagged
/// `Outcome` which converts into `Result<Response, Failure>` on the awaiting
/// side.
pub trait IsOutcomeListener: From<OutcomeNotifier<Self::Outcome>> {
    type Request: Send;
    type Response;
    type Failure: Into<RelayError>;
    type Outcome: Into<Result<Self::Response, Self::Failure>> + Send;
}
