use crate::prelude::*;
use std::collections::VecDeque;

/// An [`OperationExecutor`] double that completes every request synchronously
/// from a queue of pre-programmed outcomes, in order. Rejects requests once
/// the queue runs dry.
pub struct ScriptedExecutor<T> {
    outcomes: Mutex<VecDeque<ApiOutcome<T>>>,
}

impl<T> ScriptedExecutor<T> {
    pub fn new(outcomes: impl IntoIterator<Item = ApiOutcome<T>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }

    pub fn succeeding(data: T) -> Self {
        Self::new([ApiOutcome::success(data)])
    }

    pub fn failing(error: ApiError) -> Self {
        Self::new([ApiOutcome::failure(error)])
    }
}

impl<Req: Send, T: Send> OperationExecutor<ApiOutcomeListener<Req, T>> for ScriptedExecutor<T> {
    fn execute_request(
        &self,
        _request: Req,
        listener: ApiOutcomeListener<Req, T>,
    ) -> Result<(), ExecutorError> {
        let Some(outcome) = self
            .outcomes
            .lock()
            .expect("Script lock poisoned.")
            .pop_front()
        else {
            return Err(ExecutorError::Rejected {
                reason: "scripted executor ran out of outcomes".to_owned(),
            });
        };
        listener.notify_outcome(outcome);
        Ok(())
    }
}
