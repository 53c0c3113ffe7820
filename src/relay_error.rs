use crate::prelude::*;
use thiserror::Error;

/// Errors an executor can raise synchronously, before the operation has even
/// started. Failures of the operation itself travel through the outcome
/// channel instead.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ExecutorError {
    #[error("Executor rejected the request: {reason}")]
    Rejected { reason: String },

    #[error("Executor is shutting down and no longer accepts requests")]
    ShuttingDown,
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum DeliveryError {
    /// The executor dropped its listener without notifying any outcome, so
    /// neither success nor error will ever arrive for this operation.
    #[error("Operation finished without delivering an outcome")]
    OutcomeChannelClosed,
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum RelayError {
    #[error(transparent)]
    Delivery {
        #[from]
        error: DeliveryError,
    },

    #[error(transparent)]
    Executor {
        #[from]
        error: ExecutorError,
    },

    #[error(transparent)]
    Api {
        #[from]
        error: ApiError,
    },
}
