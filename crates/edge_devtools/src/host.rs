//! The capability surface a hosting editor supplies to this integration.

use std::sync::atomic::{AtomicBool, Ordering::SeqCst};

/// Error-notification surface of the hosting editor.
///
/// Injected rather than reached for globally so resolution stays testable
/// without a running host.
pub trait UserNotifier: Send + Sync {
    fn show_error_message(&self, message: &str);
}

/// Cooperative cancellation flag handed to provider calls.
///
/// Both provider operations accept one but complete unconditionally once
/// invoked; there is no long-running work to interrupt.
#[derive(Debug, Default)]
pub struct CancellationToken {
    cancelled: AtomicBool,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(SeqCst)
    }
}
