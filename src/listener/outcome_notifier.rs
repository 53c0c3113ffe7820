use crate::prelude::*;

/// An object representing that a dispatcher is waiting for the outcome of an
/// operation carried out by an executor. When the executor has finished the
/// operation, either successfully or with failure, it passes the outcome back
/// by calling `notify_outcome`, which completes the dispatcher's await.
///
/// The underlying oneshot sender is consumed on first use, so only the first
/// notification for an operation is delivered. A second call is ignored with
/// a warning rather than aborting the process, a misbehaving executor must
/// not take the host application down with it.
pub struct OutcomeNotifier<O> {
    sender: Mutex<Option<Sender<O>>>,
}

impl<O> OutcomeNotifier<O> {
    pub(crate) fn new(sender: Sender<O>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Called by the executor exactly once per operation, with the outcome.
    pub fn notify_outcome(&self, outcome: O) {
        let Some(sender) = self
            .sender
            .lock()
            .expect("Outcome sender lock should never be poisoned.")
            .take()
        else {
            warn!("Outcome already delivered for this operation, ignoring.");
            return;
        };

        if sender.send(outcome).is_err() {
            // The dispatcher stopped awaiting, nothing is listening anymore.
            debug!("Outcome receiver was dropped before delivery.");
        }
    }
}
