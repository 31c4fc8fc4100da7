//! Thread-local indicator state and the counter protocol.
//!
//! Each thread lazily owns one `IndicatorState`: a reentrancy lock depth
//! and a monotone approval counter. The counter advances by exactly one
//! per approved completed operation while the depth is zero; nested
//! internal sub-calls run with counting suppressed. No state is ever
//! shared across threads and the thread-local destructor reclaims it at
//! thread exit.

use serde::{Deserialize, Serialize};

/// Outcome of an edge-triggered approval check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// The bracketed operation completed with approved parameters.
    Approved,
    /// The bracketed operation did not record an approval.
    NotApproved,
}

/// Bracket `op` with counter snapshots and report whether it recorded an
/// approval.
///
/// Equivalent to calling [`before_call`], running the operation, calling
/// [`after_call`], and comparing the snapshots. In the stub build every
/// operation reports [`ApprovalStatus::Approved`].
pub fn check_approved<T>(op: impl FnOnce() -> T) -> (T, ApprovalStatus) {
    let before = before_call();
    let out = op();
    let status = if after_call() > before {
        ApprovalStatus::Approved
    } else {
        ApprovalStatus::NotApproved
    };
    (out, status)
}

/// RAII guard suppressing indicator updates for its lifetime.
///
/// Composite primitives hold one across their internal sub-calls so that
/// an inner, implementation-detail operation cannot record its own
/// approval. Locks nest; the depth returns to its prior value on drop.
#[must_use = "dropping the guard immediately re-enables indicator updates"]
#[derive(Debug)]
pub struct StateLock(());

impl StateLock {
    /// Increment this thread's lock depth until the guard is dropped.
    pub fn acquire() -> Self {
        lock_state();
        Self(())
    }
}

impl Drop for StateLock {
    fn drop(&mut self) {
        unlock_state();
    }
}

#[cfg(feature = "fips")]
pub use full::{after_call, before_call, lock_state, unlock_state};
#[cfg(feature = "fips")]
pub(crate) use full::update_state;

#[cfg(feature = "fips")]
mod full {
    use std::cell::Cell;

    use crate::error::{IndicatorError, Result};

    const STATE_UNLOCKED: u64 = 0;

    #[derive(Debug, Clone, Copy)]
    struct IndicatorState {
        /// Number of times the indicator has been locked. Updates are
        /// recorded only while this is `STATE_UNLOCKED`.
        lock_depth: u64,
        /// Incremented when an approved service completes.
        counter: u64,
    }

    thread_local! {
        // Lazily initialized on first access from any approved service,
        // so the indicator is maintained whether or not the caller ever
        // queries it. Reclaimed by the thread-local destructor.
        static INDICATOR_STATE: Cell<IndicatorState> = const {
            Cell::new(IndicatorState { lock_depth: STATE_UNLOCKED, counter: 0 })
        };
    }

    /// Runs `f` against this thread's state, or reports the store
    /// unavailable (thread teardown). Consumed internally only; callers
    /// of the public API never see the error.
    fn with_state<R>(f: impl FnOnce(&Cell<IndicatorState>) -> R) -> Result<R> {
        INDICATOR_STATE.try_with(f).map_err(|_| IndicatorError::StateUnavailable)
    }

    /// Mismatched lock/unlock nesting is a programming error in the
    /// calling primitive, not a runtime condition to recover from.
    /// Continuing would risk emitting a corrupted compliance signal, so
    /// the process stops. Test builds panic instead so harnesses can
    /// observe the fault.
    #[cold]
    #[allow(clippy::panic)]
    fn contract_violation(detail: &str) -> ! {
        tracing::error!(target: "fips_indicator", "indicator contract violated: {detail}");
        #[cfg(test)]
        panic!("indicator contract violated: {detail}");
        #[cfg(not(test))]
        std::process::abort();
    }

    /// Snapshot this thread's approval counter before invoking an
    /// operation. Returns 0 if no state is available.
    #[must_use]
    pub fn before_call() -> u64 {
        with_state(|cell| cell.get().counter).unwrap_or(0)
    }

    /// Snapshot this thread's approval counter after an operation
    /// returns. Approval occurred iff this exceeds the matching
    /// [`before_call`] snapshot.
    #[must_use]
    pub fn after_call() -> u64 {
        with_state(|cell| cell.get().counter).unwrap_or(0)
    }

    /// Record one approved completed operation, unless the indicator is
    /// locked or no state is available. Never surfaces failure.
    pub(crate) fn update_state() {
        let _ = with_state(|cell| {
            let mut state = cell.get();
            if state.lock_depth == STATE_UNLOCKED {
                let Some(counter) = state.counter.checked_add(1) else {
                    contract_violation("approval counter overflow");
                };
                state.counter = counter;
                cell.set(state);
            }
        });
    }

    /// Suppress indicator updates until the matching [`unlock_state`].
    ///
    /// Locks nest: a composite primitive locks once around all of its
    /// internal sub-calls, and those sub-calls may lock again.
    pub fn lock_state() {
        let _ = with_state(|cell| {
            let mut state = cell.get();
            // Overflow would imply a call stack deeper than a u64 can
            // count, which is unreachable under correct nesting.
            let Some(depth) = state.lock_depth.checked_add(1) else {
                contract_violation("lock depth overflow");
            };
            state.lock_depth = depth;
            cell.set(state);
        });
    }

    /// Release one level of update suppression.
    ///
    /// Calling this without a matching [`lock_state`] terminates the
    /// process.
    pub fn unlock_state() {
        let _ = with_state(|cell| {
            let mut state = cell.get();
            if state.lock_depth == STATE_UNLOCKED {
                contract_violation("unlock without matching lock");
            }
            state.lock_depth -= 1;
            cell.set(state);
        });
    }

}

#[cfg(not(feature = "fips"))]
pub use stub::{after_call, before_call, lock_state, unlock_state};
#[cfg(not(feature = "fips"))]
pub(crate) use stub::update_state;

#[cfg(not(feature = "fips"))]
mod stub {
    /// Always 0 in the stub build.
    #[must_use]
    pub fn before_call() -> u64 {
        0
    }

    /// Always 1 in the stub build, so it always exceeds the return value
    /// of [`before_call`] and every operation reports approved. Absence
    /// of the tracking feature must never produce a false negative for a
    /// caller gating logic on the indicator.
    #[must_use]
    pub fn after_call() -> u64 {
        1
    }

    /// No-op in the stub build.
    pub fn lock_state() {}

    /// No-op in the stub build.
    pub fn unlock_state() {}

    pub(crate) fn update_state() {}
}
