//! Deadline-based debouncing.
//!
//! Time is passed in by the caller, so nothing here sleeps or spawns; the
//! owner polls with the current instant.

use std::time::{Duration, Instant};

/// A single pending call with its payload.
///
/// Scheduling replaces whatever was pending and restarts the delay, so a
/// burst of calls fires once, with the last payload.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    due: Instant,
    payload: T,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending call and schedule `payload` to fire at
    /// `now + delay`.
    pub fn schedule(&mut self, now: Instant, payload: T) {
        self.pending = Some(Pending {
            due: now + self.delay,
            payload,
        });
    }

    /// Take the payload if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|pending| now >= pending.due) {
            self.pending.take().map(|pending| pending.payload)
        } else {
            None
        }
    }

    /// Drop the pending call, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.payload)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending call fires.
    pub fn due(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    /// Payload waiting to fire.
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|pending| &pending.payload)
    }
}
