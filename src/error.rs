//! Error types
//!
//! Two families of failures exist in this crate:
//!
//! - [`EntropyError`] describes why an operating system backend could not
//!   deliver secure bytes. It never escapes the public entropy API as a
//!   hard error: callers observe it as `None`.
//! - [`RandomError`] describes a violated precondition on a sampling call
//!   (an empty range or an out-of-bounds bit count). It is returned by the
//!   `try_*` entry points; the plain entry points panic instead.

use thiserror::Error;

/// Failure of an entropy backend to fill a buffer.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The backend exists but cannot currently provide secure bytes
    /// (e.g. the kernel pool is not initialized yet).
    #[error("secure entropy is currently unavailable")]
    Unavailable,

    /// The backend stopped before the buffer was full.
    #[error("entropy backend returned {filled} of {requested} bytes")]
    ShortRead { requested: usize, filled: usize },

    /// The random device could not be opened or read.
    #[error("entropy device error: {0}")]
    Io(#[from] std::io::Error),

    /// No backend is available on this target.
    #[error("no entropy backend for this platform")]
    Unsupported,
}

/// Violated precondition on a sampling request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// The upper bound is below the lower bound (integers) or not strictly
    /// above it (floats).
    #[error("invalid range: upper bound must not precede lower bound")]
    InvalidRange,

    /// A bit count outside `1..=max` was requested.
    #[error("invalid bit count {requested}: expected 1..={max}")]
    InvalidBitCount { requested: u32, max: u32 },
}
