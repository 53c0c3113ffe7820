use crate::prelude::*;

/// The external component that actually performs asynchronous operations,
/// e.g. a platform networking layer the embedding application installs.
///
/// `execute_request` must either return an [`ExecutorError`] synchronously or
/// eventually call `notify_outcome` on the listener, on whichever thread the
/// executor completes the work. Dropping the listener without notifying is
/// reported to the awaiting side as
/// [`DeliveryError::OutcomeChannelClosed`](crate::DeliveryError::OutcomeChannelClosed).
pub trait OperationExecutor<L: IsOutcomeListener>: Send + Sync {
    fn execute_request(&self, request: L::Request, listener: L) -> Result<(), ExecutorError>;
}
