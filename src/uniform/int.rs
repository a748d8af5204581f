//! Uniform integers over closed ranges.
//!
//! Sampling never reduces a wide value modulo the range size. Instead the
//! smallest bit width covering `high − low` is composed and draws above
//! `high − low` are rejected, so every value of the range is exactly
//! equally likely.

use super::SampleUniform;
use crate::primitives::{SignedWord, UnsignedWord};
use crate::rng::{RawGenerator, compose};

/// Draws uniformly from `[low, high]`; `low <= high` is required.
pub(crate) fn sample_unsigned<G: RawGenerator, T: UnsignedWord>(rng: &mut G, low: T, high: T) -> T {
    if low == high {
        return low;
    }

    let difference = high - low;

    // Every bit pattern is in range.
    if difference == T::MAX {
        return compose::<G, T>(rng, T::BITS).wrapping_add(low);
    }

    let bit_count = T::BITS - difference.leading_zeros();

    loop {
        let offset: T = compose(rng, bit_count);

        if offset <= difference {
            return low + offset;
        }
    }
}

/// Draws uniformly from `[low, high]`; `low <= high` is required.
///
/// The range is measured as an unsigned magnitude, sampled in the magnitude
/// type, and the offset is added back onto `low`.
pub(crate) fn sample_signed<G: RawGenerator, S: SignedWord>(rng: &mut G, low: S, high: S) -> S {
    let span = S::span(low, high);
    let offset = sample_unsigned(rng, <S::Magnitude as UnsignedWord>::ZERO, span);

    low.offset_by(offset)
}

macro_rules! impl_sample_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl SampleUniform for $t {
                const DEFAULT_LOW: Self = <$t>::MIN;
                const DEFAULT_HIGH: Self = <$t>::MAX;

                #[inline]
                fn is_valid_range(low: Self, high: Self) -> bool {
                    low <= high
                }

                #[inline]
                fn sample_valid<G: RawGenerator>(rng: &mut G, low: Self, high: Self) -> Self {
                    sample_unsigned(rng, low, high)
                }
            }
        )*
    };
}

macro_rules! impl_sample_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl SampleUniform for $t {
                const DEFAULT_LOW: Self = <$t>::MIN;
                const DEFAULT_HIGH: Self = <$t>::MAX;

                #[inline]
                fn is_valid_range(low: Self, high: Self) -> bool {
                    low <= high
                }

                #[inline]
                fn sample_valid<G: RawGenerator>(rng: &mut G, low: Self, high: Self) -> Self {
                    sample_signed(rng, low, high)
                }
            }
        )*
    };
}

impl_sample_unsigned!(u8, u16, u32, u64, u128, usize);
impl_sample_signed!(i8, i16, i32, i64, i128, isize);
