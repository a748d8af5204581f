//! Shared generators
//!
//! Generators are plain owned values drawn from through `&mut`. When one
//! generator must serve several owners, possibly on different threads, it
//! is wrapped in a [`SharedGenerator`], which serializes access with a
//! mutex. Each closure passed to [`SharedGenerator::with`] runs with
//! exclusive access, so a multi-draw operation is never interleaved with
//! another caller's draws.

use std::sync::{Mutex, PoisonError};

use crate::rng::RawGenerator;

/// A generator behind a mutex.
///
/// ```
/// use std::sync::Arc;
/// use nebula_random::rng::Xorshift64Star;
/// use nebula_random::shared::SharedGenerator;
/// use nebula_random::uniform::Uniform;
///
/// let shared = Arc::new(SharedGenerator::new(Xorshift64Star::new(1)));
/// let roll: u8 = shared.with(|rng| rng.uniform_in(1, 6));
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Default)]
pub struct SharedGenerator<G> {
    inner: Mutex<G>,
}

impl<G: RawGenerator> SharedGenerator<G> {
    pub fn new(rng: G) -> Self {
        Self {
            inner: Mutex::new(rng),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// A panic inside an earlier closure does not make the generator
    /// unusable: its state is still a valid state, only a different one.
    pub fn with<R>(&self, f: impl FnOnce(&mut G) -> R) -> R {
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> G {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
