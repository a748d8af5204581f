//! Operating system entropy backend (macOS)

use libc::arc4random_buf;

use crate::error::EntropyError;

pub(crate) const BACKEND: &str = "arc4random_buf";

/// `arc4random_buf` cannot fail; the result type matches the other backends.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
