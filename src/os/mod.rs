//! Operating system entropy layer
//!
//! This module provides a unified, platform-independent way to obtain
//! cryptographically secure random bytes from the operating system.
//!
//! The backend is selected at compile time using conditional compilation
//! and cargo features. Each backend exposes the same surface:
//!
//! - `sys_random(buf)` fills `buf` entirely or reports an [`EntropyError`]
//! - `BACKEND` names the mechanism, for diagnostics
//!
//! | Target                   | Backend                                   |
//! |--------------------------|-------------------------------------------|
//! | Linux                    | `getrandom(2)`, device fallback on ENOSYS |
//! | macOS                    | `arc4random_buf`                          |
//! | Windows                  | `BCryptGenRandom`                         |
//! | other Unix               | `/dev/urandom`                            |
//! | any Unix with `urandom`  | `/dev/urandom`                            |
//!
//! Backends may leave `buf` partially written when they fail. Callers that
//! must not observe partial output go through [`crate::entropy`], which
//! stages bytes in a scratch buffer.
//!
//! [`EntropyError`]: crate::error::EntropyError

#[cfg(all(unix, any(not(target_os = "macos"), feature = "urandom")))]
pub(crate) mod device;

#[cfg(all(target_os = "linux", not(feature = "urandom")))]
mod linux;

#[cfg(all(target_os = "linux", not(feature = "urandom")))]
pub(crate) use linux::*;

#[cfg(all(target_os = "macos", not(feature = "urandom")))]
mod macos;

#[cfg(all(target_os = "macos", not(feature = "urandom")))]
pub(crate) use macos::*;

#[cfg(all(
    unix,
    any(feature = "urandom", not(any(target_os = "linux", target_os = "macos")))
))]
pub(crate) use device::{BACKEND, sys_random};

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub(crate) use windows::*;

#[cfg(not(any(unix, windows)))]
mod unsupported {
    use crate::error::EntropyError;

    pub(crate) const BACKEND: &str = "unsupported";

    pub(crate) fn sys_random(_buf: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError::Unsupported)
    }
}

#[cfg(not(any(unix, windows)))]
pub(crate) use unsupported::*;
