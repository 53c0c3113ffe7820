use crate::prelude::*;

/// A process wide hook observing every failed call going through an
/// [`ApiDispatcher`], regardless of which caller awaited it. Embedding
/// applications typically forward these to their crash or analytics
/// reporting.
pub trait ErrorListener: Send + Sync {
    fn on_error(&self, error: &RelayError, called_from: &str);
}
