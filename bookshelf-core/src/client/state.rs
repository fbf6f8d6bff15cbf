//! Observable state owned by a request hook

use crate::types::Notification;

/// Snapshot of a hook's request state
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    /// Body of the last successful (and current) response
    pub payload: Option<T>,

    /// Outcome banner of the last request
    pub notification: Notification,

    outstanding: usize,

    /// Generation of the newest request whose outcome was published
    applied: u64,
}

impl<T> RequestState<T> {
    /// True exactly while at least one request is outstanding
    pub fn loading(&self) -> bool {
        self.outstanding > 0
    }

    pub(crate) fn begin(&mut self) {
        self.outstanding += 1;
    }

    pub(crate) fn finish(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    /// Record `generation` as published unless a newer one already was
    pub(crate) fn claim(&mut self, generation: u64) -> bool {
        if generation > self.applied {
            self.applied = generation;
            true
        } else {
            false
        }
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            payload: None,
            notification: Notification::default(),
            outstanding: 0,
            applied: 0,
        }
    }
}
