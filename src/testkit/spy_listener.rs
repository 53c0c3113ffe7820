use crate::prelude::*;

/// A [`ResponseListener`] recording every notification it receives, for
/// asserting which of the two paths fired and with what payload.
pub struct SpyListener<T> {
    successes: Mutex<Vec<ApiSuccess<T>>>,
    errors: Mutex<Vec<ApiError>>,
}

impl<T> SpyListener<T> {
    pub fn new() -> Self {
        Self {
            successes: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
        }
    }

    pub fn success_count(&self) -> usize {
        self.successes.lock().expect("Spy lock poisoned.").len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().expect("Spy lock poisoned.").len()
    }

    pub fn successes(&self) -> Vec<ApiSuccess<T>>
    where
        T: Clone,
    {
        self.successes.lock().expect("Spy lock poisoned.").clone()
    }

    pub fn errors(&self) -> Vec<ApiError> {
        self.errors.lock().expect("Spy lock poisoned.").clone()
    }
}

impl<T> Default for SpyListener<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> ResponseListener<T> for SpyListener<T> {
    fn on_success(&self, response: ApiSuccess<T>) {
        self.successes
            .lock()
            .expect("Spy lock poisoned.")
            .push(response);
    }

    fn on_error(&self, error: ApiError) {
        self.errors.lock().expect("Spy lock poisoned.").push(error);
    }
}
