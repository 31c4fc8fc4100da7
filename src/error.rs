//! Error types for indicator-internal signalling.
//!
//! These errors never cross the public counter or verification APIs: a
//! missing store degrades to "no recording possible" and parameter-probe
//! failures collapse to not-approved. They exist so the internal plumbing
//! can use ordinary `Result` flow instead of sentinel values.

use thiserror::Error;

/// Errors internal to the service indicator subsystem.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// The thread-local indicator state could not be reached, e.g. during
    /// thread teardown after its destructor has already run.
    #[error("thread-local indicator state unavailable")]
    StateUnavailable,

    /// A resolved operation parameter could not be retrieved from the
    /// context handed over by the primitive implementation.
    #[error("failed to retrieve operation parameter: {0}")]
    ParameterProbe(&'static str),
}

/// A specialized Result type for indicator-internal operations.
pub type Result<T> = std::result::Result<T, IndicatorError>;
