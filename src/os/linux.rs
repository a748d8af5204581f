//! Operating system entropy backend (Linux)
//!
//! Bytes are requested from the kernel with the `getrandom` system call.
//! `GRND_NONBLOCK` is passed so that an uninitialized entropy pool is
//! reported as [`EntropyError::Unavailable`] instead of blocking the caller
//! indefinitely during early boot.
//!
//! Kernels older than 3.17 do not implement the system call; in that case
//! the random device is read instead.

use libc::{EAGAIN, EINTR, ENOSYS, GRND_NONBLOCK, c_void, getrandom};

use super::device;
use crate::error::EntropyError;

pub(crate) const BACKEND: &str = "getrandom";

/// Fills a buffer with cryptographically secure random bytes from the kernel.
///
/// Partial reads are handled transparently by repeating the call on the
/// unfilled tail. Interrupted calls are retried.
///
/// # Errors
/// - [`EntropyError::Unavailable`] if the pool is not initialized yet
/// - [`EntropyError::ShortRead`] if the kernel returns zero bytes
/// - [`EntropyError::Io`] for any other failure
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                GRND_NONBLOCK,
            )
        };

        if ret < 0 {
            let err = std::io::Error::last_os_error();

            match err.raw_os_error() {
                Some(EINTR) => continue,
                Some(EAGAIN) => return Err(EntropyError::Unavailable),
                Some(ENOSYS) => {
                    tracing::debug!(device = device::BACKEND, "getrandom not implemented");
                    return device::sys_random(buf);
                }
                _ => return Err(err.into()),
            }
        }

        if ret == 0 {
            return Err(EntropyError::ShortRead {
                requested: buf.len(),
                filled,
            });
        }

        filled += ret as usize;
    }

    Ok(())
}
