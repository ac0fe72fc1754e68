//! One-way stop flag for cooperative stopping.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// A flag requesting that a tasklet stop at its next invocation boundary.
///
/// Requests are idempotent and there is no way to clear the flag: a fresh
/// signal is needed to run again.
#[derive(Debug, Default)]
pub struct StopSignal {
    requested: AtomicBool,
}

impl StopSignal {
    /// Creates a signal that has not been requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop.
    ///
    /// Returns true only for the call that flipped the flag.
    pub fn request(&self) -> bool {
        let first = self
            .requested
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();

        if first {
            debug!("Stop requested");
        }
        first
    }

    /// Returns whether a stop has been requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_signal_default_not_requested() {
        let signal = StopSignal::new();
        assert!(!signal.is_requested());
    }

    #[test]
    fn test_request_sets_flag() {
        let signal = StopSignal::new();
        assert!(signal.request());
        assert!(signal.is_requested());
    }

    #[test]
    fn test_request_idempotent() {
        let signal = StopSignal::new();
        assert!(signal.request());
        assert!(!signal.request());
        assert!(signal.is_requested());
    }

    #[test]
    fn test_request_from_other_thread() {
        let signal = Arc::new(StopSignal::new());
        let remote = Arc::clone(&signal);

        std::thread::spawn(move || {
            remote.request();
        })
        .join()
        .unwrap();

        assert!(signal.is_requested());
    }
}
