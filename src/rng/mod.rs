//! Raw generators
//!
//! A raw generator is an infinite source of fixed-width unsigned words. It
//! owns its state exclusively and advances it on every draw. Nothing here
//! knows about ranges or distributions: those are built on top of a
//! generator by [`compose`] and the [`crate::uniform`] module.
//!
//! A generator declares the closed interval `[MIN, MAX]` its draws fall in.
//! Most generators cover the full range of their word type; others only a
//! sub-range. From these bounds the framework derives how many bits of each
//! draw are uniformly distributed, see [`usable_bits`].
//!
//! Two concrete generators ship with the crate:
//! - [`Xorshift64Star`]: fast, small state, not cryptographic
//! - [`ChaCha20Rng`]: ChaCha20 keystream, suitable when seeded from
//!   [`OsEntropy`](crate::entropy::OsEntropy)

pub(crate) mod chacha20;
mod chacha;
mod composer;
mod xorshift;

use crate::entropy::{EntropySource, OsEntropy};
use crate::primitives::UnsignedWord;

pub use chacha::ChaCha20Rng;
pub use composer::compose;
pub use xorshift::Xorshift64Star;

/// The capability every pseudo-random generator provides.
///
/// Implementors supply a state type, a native word type and a draw
/// primitive. Everything else in the crate is written in terms of this
/// trait.
///
/// # Degenerate generators
/// A generator whose `MIN == MAX` has no usable bits. The framework does
/// not detect this at draw time: rejection loops built on such a generator
/// cannot make progress. Avoiding it is the implementor's obligation.
pub trait RawGenerator {
    /// Explicit state a generator is constructed from.
    type State;

    /// Native output word.
    type Word: UnsignedWord;

    /// Smallest value [`RawGenerator::next_word`] returns.
    const MIN: Self::Word = <Self::Word as UnsignedWord>::ZERO;

    /// Largest value [`RawGenerator::next_word`] returns.
    const MAX: Self::Word = <Self::Word as UnsignedWord>::MAX;

    /// Creates a generator from explicit state.
    ///
    /// Two generators built from equal states produce equal sequences.
    fn from_state(state: Self::State) -> Self
    where
        Self: Sized;

    /// Advances the state and returns one word in `[MIN, MAX]`.
    fn next_word(&mut self) -> Self::Word;

    /// Number of uniformly distributed bits in one draw.
    fn usable_bits() -> u32
    where
        Self: Sized,
    {
        usable_bits(Self::MIN, Self::MAX)
    }

    /// Creates a generator seeded from the operating system.
    ///
    /// Returns `None` if secure entropy is unavailable.
    fn from_entropy() -> Option<Self>
    where
        Self: Sized,
        Self::State: AsMut<[u8]> + Default,
    {
        Self::from_entropy_source(OsEntropy)
    }

    /// Creates a generator whose state is read from `source`.
    ///
    /// Returns `None` if the source cannot fill the state.
    fn from_entropy_source<E: EntropySource>(mut source: E) -> Option<Self>
    where
        Self: Sized,
        Self::State: AsMut<[u8]> + Default,
    {
        let mut state = Self::State::default();
        source.fill(state.as_mut())?;

        Some(Self::from_state(state))
    }
}

/// Derives the number of uniformly distributed bits in a draw from the
/// declared output bounds.
///
/// A generator spanning its whole word has `W::BITS` usable bits. Otherwise
/// the usable width is `floor(log2(MAX − MIN + 1))`: the largest power of
/// two not exceeding the number of distinct outputs.
///
/// Returns `0` for a degenerate generator (`min == max`).
pub fn usable_bits<W: UnsignedWord>(min: W, max: W) -> u32 {
    let span = max.wrapping_sub(min);

    if span == W::MAX {
        return W::BITS;
    }

    W::BITS - (span + W::ONE).leading_zeros() - 1
}
