//! Bit composition
//!
//! Builds an unsigned value of an exact bit width out of raw draws. The
//! requested width may be smaller than, larger than, or not a multiple of
//! the generator's usable bits per draw.
//!
//! Each draw is first normalized by subtracting `MIN`. Draws above
//! `2^usable − 1` are rejected: when the generator's range is not a power of
//! two, keeping them would make some low bit patterns more likely than
//! others once several draws are concatenated.

use super::RawGenerator;
use crate::primitives::UnsignedWord;

/// Returns a uniformly distributed value below `2^bits`.
///
/// The value is assembled from `bits / usable` full chunks, each shifted
/// into place above the previous one, plus one masked partial chunk for
/// the remaining `bits % usable` bits.
///
/// # Panics
/// If `bits` is outside `1..=T::BITS`, in every build.
///
/// # Termination
/// Rejection ends after a geometric number of draws (fewer than two on
/// average). A degenerate generator (`MIN == MAX`) never yields a usable
/// draw and is rejected by a debug assertion.
pub fn compose<G: RawGenerator, T: UnsignedWord>(rng: &mut G, bits: u32) -> T {
    assert!(
        (1..=T::BITS).contains(&bits),
        "bit count {bits} outside 1..={}",
        T::BITS
    );

    let native = <G::Word as UnsignedWord>::BITS;
    let usable = G::usable_bits();
    debug_assert!(usable > 0, "degenerate generator: MIN == MAX");

    if T::BITS == native && usable == native && bits == T::BITS {
        return rng.next_word().cast();
    }

    let quotient = bits / usable;
    let remainder = bits % usable;
    let mut value = T::ZERO;

    for chunk in 0..quotient {
        let word: T = draw_usable(rng, usable).cast();
        value = value | (word << (usable * chunk));
    }

    if remainder != 0 {
        let masked = draw_usable(rng, usable) & <G::Word as UnsignedWord>::low_mask(remainder);
        let word: T = masked.cast();
        value = value | (word << (usable * quotient));
    }

    value
}

/// Draws until the normalized word fits in `usable` bits.
fn draw_usable<G: RawGenerator>(rng: &mut G, usable: u32) -> G::Word {
    let native = <G::Word as UnsignedWord>::BITS;
    let threshold = <G::Word as UnsignedWord>::MAX >> (native - usable);

    loop {
        let word = rng.next_word().wrapping_sub(G::MIN);

        if word <= threshold {
            return word;
        }
    }
}
