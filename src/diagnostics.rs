//! Thread-local diagnostic error queue.
//!
//! This is the surface of the library's diagnostic subsystem that the
//! indicator consumes. Parameter probes raise entries here when a context
//! fails to report a value; the composite signature rules clear the queue
//! before returning so a failed probe never leaks a stale diagnostic to the
//! cryptographic caller.
//!
//! Like the indicator state itself, the queue is strictly per-thread and
//! degrades silently when the thread-local is unavailable during teardown.

use std::cell::RefCell;

thread_local! {
    static ERROR_QUEUE: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// Push a diagnostic entry onto this thread's error queue.
pub fn raise_error(message: &'static str) {
    tracing::debug!(target: "fips_indicator", error = message, "diagnostic raised");
    let _ = ERROR_QUEUE.try_with(|queue| {
        if let Ok(mut queue) = queue.try_borrow_mut() {
            queue.push(message);
        }
    });
}

/// Drop every pending diagnostic entry on this thread.
pub fn clear_error_queue() {
    let _ = ERROR_QUEUE.try_with(|queue| {
        if let Ok(mut queue) = queue.try_borrow_mut() {
            if !queue.is_empty() {
                tracing::trace!(
                    target: "fips_indicator",
                    dropped = queue.len(),
                    "diagnostic queue cleared"
                );
            }
            queue.clear();
        }
    });
}

/// Number of diagnostic entries pending on this thread.
#[must_use]
pub fn pending_errors() -> usize {
    ERROR_QUEUE
        .try_with(|queue| queue.try_borrow().map(|q| q.len()).unwrap_or(0))
        .unwrap_or(0)
}
