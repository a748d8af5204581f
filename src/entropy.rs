//! Entropy sources
//!
//! An entropy source delivers cryptographically secure random bytes. It is
//! used once, when a generator is seeded, and never on the sampling path.
//!
//! The contract is all-or-nothing: a request either yields exactly the
//! number of bytes asked for, or nothing at all. Bytes are gathered into a
//! scratch buffer and only handed to the caller once the backend succeeded,
//! so a failing backend can never leave a half-written seed behind.
//!
//! Failure is expected in restricted or sandboxed environments and is
//! therefore reported as `None` rather than as a panic.

use crate::error::EntropyError;
use crate::os;
use crate::primitives::UnsignedWord;

/// A provider of cryptographically secure random bytes.
///
/// Implementors only provide [`EntropySource::try_fill`]; the remaining
/// methods layer the all-or-nothing contract on top of it.
pub trait EntropySource {
    /// Fills `dest` completely or reports why it could not.
    ///
    /// On error, `dest` may have been partially written.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns exactly `byte_count` secure bytes, or `None` if the source
    /// cannot currently provide them.
    fn fetch(&mut self, byte_count: usize) -> Option<Vec<u8>> {
        let mut scratch = vec![0u8; byte_count];

        match self.try_fill(&mut scratch) {
            Ok(()) => Some(scratch),
            Err(err) => {
                tracing::warn!(byte_count, error = %err, "entropy unavailable");
                None
            }
        }
    }

    /// Returns `count` secure words decoded little-endian, or `None`.
    ///
    /// A `count` whose byte length overflows `usize` is `None`.
    fn fetch_words<W: UnsignedWord>(&mut self, count: usize) -> Option<Vec<W>>
    where
        Self: Sized,
    {
        let width = (W::BITS / 8) as usize;
        let bytes = self.fetch(count.checked_mul(width)?)?;

        Some(bytes.chunks_exact(width).map(W::from_le_slice).collect())
    }

    /// Fills `dest` with secure bytes.
    ///
    /// Returns `None` and leaves `dest` untouched on failure.
    fn fill(&mut self, dest: &mut [u8]) -> Option<()> {
        let bytes = self.fetch(dest.len())?;
        dest.copy_from_slice(&bytes);

        Some(())
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).try_fill(dest)
    }
}

/// The operating system entropy source.
///
/// The backend is chosen at compile time; see the crate documentation for
/// the per-platform table.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    /// Name of the compiled-in backend.
    pub fn backend() -> &'static str {
        os::BACKEND
    }
}

impl EntropySource for OsEntropy {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        tracing::debug!(backend = os::BACKEND, bytes = dest.len(), "reading entropy");

        os::sys_random(dest)
    }
}
