//! Random device entropy backend
//!
//! Reads from `/dev/urandom`. The device handle is owned by a local
//! [`File`] and is closed on every return path, including early failure.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::EntropyError;

pub(crate) const BACKEND: &str = "/dev/urandom";

/// Fills `buf` from the system random device.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    read_device(Path::new(BACKEND), buf)
}

/// Fills `buf` from the device at `path`.
///
/// # Errors
/// - [`EntropyError::Io`] if the device cannot be opened or read
/// - [`EntropyError::ShortRead`] if the device reaches end of file early
pub(crate) fn read_device(path: &Path, buf: &mut [u8]) -> Result<(), EntropyError> {
    let mut device = File::open(path)?;
    let mut filled = 0;

    while filled < buf.len() {
        match device.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(EntropyError::ShortRead {
                    requested: buf.len(),
                    filled,
                });
            }
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
