//! Operating system entropy backend (Windows)

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

use crate::error::EntropyError;

pub(crate) const BACKEND: &str = "BCryptGenRandom";

/// Fills `buf` using the system-preferred RNG.
///
/// `BCryptGenRandom` takes a 32-bit length, so large buffers are filled in
/// chunks.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            tracing::debug!(status, "BCryptGenRandom failed");
            return Err(EntropyError::Unavailable);
        }
    }

    Ok(())
}
