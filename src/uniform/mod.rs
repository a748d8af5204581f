//! Uniform distributions
//!
//! This module turns a [`RawGenerator`] into uniformly distributed values:
//!
//! - integers (signed and unsigned) over a closed range `[low, high]`
//! - floats over a half-open range `[low, high)`
//! - raw bit strings and unit floats of caller-chosen precision
//! - finite sequences of any of the above
//!
//! Every method is available on any generator through the blanket
//! [`Uniform`] extension trait.
//!
//! ```
//! use nebula_random::rng::{RawGenerator, Xorshift64Star};
//! use nebula_random::uniform::Uniform;
//!
//! let mut rng = Xorshift64Star::new(7);
//!
//! let die: u8 = rng.uniform_in(1, 6);
//! assert!((1..=6).contains(&die));
//!
//! let temperature: f64 = rng.uniform_in(-10.0, 35.0);
//! assert!((-10.0..35.0).contains(&temperature));
//!
//! let rolls: Vec<i32> = rng.uniform_in_iter(-3, 3, 10).collect();
//! assert_eq!(rolls.len(), 10);
//! ```
//!
//! # Preconditions
//! An empty range is a programming error. The plain methods panic on it;
//! the `try_` methods return [`RandomError::InvalidRange`] instead. A range
//! is never silently reordered or widened.

mod float;
mod int;
mod sequence;

use crate::error::RandomError;
use crate::primitives::{Float, UnsignedWord};
use crate::rng::{RawGenerator, compose};

pub use float::unit;
pub use sequence::Sequence;

/// A type that can be sampled uniformly from a range.
pub trait SampleUniform: Copy + PartialOrd {
    /// Lower bound used by [`Uniform::uniform`].
    const DEFAULT_LOW: Self;

    /// Upper bound used by [`Uniform::uniform`].
    const DEFAULT_HIGH: Self;

    /// Whether `[low, high]` (integers) or `[low, high)` (floats) contains
    /// at least one value.
    fn is_valid_range(low: Self, high: Self) -> bool;

    /// Draws one value from a range already known to be valid.
    fn sample_valid<G: RawGenerator>(rng: &mut G, low: Self, high: Self) -> Self;
}

/// Uniform sampling on top of any raw generator.
pub trait Uniform: RawGenerator + Sized {
    /// Draws a value over the type's default range: the full range for
    /// integers, `[0, 1)` for floats.
    fn uniform<T: SampleUniform>(&mut self) -> T {
        T::sample_valid(self, T::DEFAULT_LOW, T::DEFAULT_HIGH)
    }

    /// Draws a value in `[low, high]` (integers) or `[low, high)` (floats).
    ///
    /// # Panics
    /// Panics if the range is empty.
    fn uniform_in<T: SampleUniform>(&mut self, low: T, high: T) -> T {
        assert!(T::is_valid_range(low, high), "{}", RandomError::InvalidRange);

        T::sample_valid(self, low, high)
    }

    /// Like [`Uniform::uniform_in`], reporting an empty range as an error.
    fn try_uniform_in<T: SampleUniform>(&mut self, low: T, high: T) -> Result<T, RandomError> {
        if !T::is_valid_range(low, high) {
            return Err(RandomError::InvalidRange);
        }

        Ok(T::sample_valid(self, low, high))
    }

    /// Lazily draws `count` values over the type's default range.
    fn uniform_iter<T: SampleUniform>(&mut self, count: usize) -> Sequence<'_, Self, T> {
        Sequence::new(self, T::DEFAULT_LOW, T::DEFAULT_HIGH, count)
    }

    /// Lazily draws `count` values from the given range.
    ///
    /// # Panics
    /// Panics if the range is empty, even when `count` is zero.
    fn uniform_in_iter<T: SampleUniform>(
        &mut self,
        low: T,
        high: T,
        count: usize,
    ) -> Sequence<'_, Self, T> {
        assert!(T::is_valid_range(low, high), "{}", RandomError::InvalidRange);

        Sequence::new(self, low, high, count)
    }

    /// Like [`Uniform::uniform_in_iter`], reporting an empty range as an
    /// error.
    fn try_uniform_in_iter<T: SampleUniform>(
        &mut self,
        low: T,
        high: T,
        count: usize,
    ) -> Result<Sequence<'_, Self, T>, RandomError> {
        if !T::is_valid_range(low, high) {
            return Err(RandomError::InvalidRange);
        }

        Ok(Sequence::new(self, low, high, count))
    }

    /// Overwrites every element of `dest` with a draw from the range.
    ///
    /// # Panics
    /// Panics if the range is empty.
    fn fill_uniform<T: SampleUniform>(&mut self, dest: &mut [T], low: T, high: T) {
        let count = dest.len();

        dest.iter_mut()
            .zip(self.uniform_in_iter(low, high, count))
            .for_each(|(slot, value)| *slot = value);
    }

    /// Returns a uniformly distributed value below `2^count`.
    ///
    /// # Panics
    /// Panics unless `1 <= count <= T::BITS`.
    fn bits<T: UnsignedWord>(&mut self, count: u32) -> T {
        match self.try_bits(count) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`Uniform::bits`], reporting a bad width as an error.
    fn try_bits<T: UnsignedWord>(&mut self, count: u32) -> Result<T, RandomError> {
        if count == 0 || count > T::BITS {
            return Err(RandomError::InvalidBitCount {
                requested: count,
                max: T::BITS,
            });
        }

        Ok(compose(self, count))
    }

    /// Returns a unit value with `min(bits, F::PRECISION)` bits of
    /// precision.
    ///
    /// Unlike [`Uniform::uniform`], the result may round up to exactly
    /// `1.0`; see [`unit`].
    fn unit<F: Float>(&mut self, bits: u32) -> F {
        unit(self, bits)
    }
}

impl<G: RawGenerator> Uniform for G {}
