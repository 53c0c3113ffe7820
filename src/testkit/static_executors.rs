use crate::prelude::*;

/// Accepts every request and then drops the listener without notifying,
/// which exercises the path where neither callback ever fires.
pub struct SilentExecutor;

impl<L: IsOutcomeListener> OperationExecutor<L> for SilentExecutor {
    fn execute_request(&self, _request: L::Request, listener: L) -> Result<(), ExecutorError> {
        drop(listener);
        Ok(())
    }
}

/// Refuses every request synchronously.
pub struct RejectingExecutor {
    reason: String,
}

impl RejectingExecutor {
    pub fn new(reason: impl AsRef<str>) -> Self {
        Self {
            reason: reason.as_ref().to_owned(),
        }
    }
}

impl<L: IsOutcomeListener> OperationExecutor<L> for RejectingExecutor {
    fn execute_request(&self, _request: L::Request, _listener: L) -> Result<(), ExecutorError> {
        Err(ExecutorError::Rejected {
            reason: self.reason.clone(),
        })
    }
}
