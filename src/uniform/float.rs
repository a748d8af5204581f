//! Uniform floats.
//!
//! A unit value is composed from as many raw draws as the requested
//! precision needs. Each draw is treated as one digit in base
//! `MAX − MIN + 1`: the running pair `(dividend, divisor)` starts at
//! `(0, 1)` and for every draw `d`
//!
//! ```text
//! dividend += (d − MIN) · divisor
//! divisor  += (MAX − MIN) · divisor
//! ```
//!
//! so after `k` draws `divisor = (MAX − MIN + 1)^k` and `dividend` is a
//! `k`-digit number below it. The quotient carries the combined precision of
//! all draws, capped by the float's significand.
//!
//! A generator whose base `MAX − MIN + 1` does not fit in the float (a
//! 128-bit word composed into `f32`) cannot be weighted that way. Such a
//! generator is always wide enough for a single chunk of `F::PRECISION` bits,
//! so its unit values are composed as bits and scaled by a power of two.

use super::SampleUniform;
use crate::primitives::{Float, UnsignedWord};
use crate::rng::{RawGenerator, compose};

/// Returns `dividend / divisor` built from `ceil(bits / usable)` draws.
///
/// Precision is capped at `F::PRECISION` bits; at least one draw is always
/// made. The exact quotient lies in `[0, 1)`, but when more digits are drawn
/// than the significand holds it can round up to `1.0`.
///
/// When the generator's base overflows `F`, the value is instead
/// `compose(bits) / 2^bits` with `bits` clamped to `1..=F::PRECISION`.
pub fn unit<G: RawGenerator, F: Float>(rng: &mut G, bits: u32) -> F {
    let usable = G::usable_bits();
    debug_assert!(usable > 0, "degenerate generator: MIN == MAX");

    let precision = bits.clamp(1, F::PRECISION);
    let span = F::from_u128(G::MAX.wrapping_sub(G::MIN).to_u128());

    if !(F::ONE + span).is_finite() {
        let digits: u128 = compose(rng, precision);
        return F::from_u128(digits) / F::from_u128(1u128 << precision);
    }

    let draws = precision.div_ceil(usable);

    let mut dividend = F::ZERO;
    let mut divisor = F::ONE;

    for _ in 0..draws {
        let digit = F::from_u128(rng.next_word().wrapping_sub(G::MIN).to_u128());

        dividend = dividend + digit * divisor;
        divisor = divisor + span * divisor;
    }

    dividend / divisor
}

/// Draws from `[low, high)`; `low < high` is required.
///
/// Results that round up to `high` are discarded and redrawn.
pub(crate) fn sample_float<G: RawGenerator, F: Float>(rng: &mut G, low: F, high: F) -> F {
    let width = high - low;

    loop {
        let value = width * unit::<G, F>(rng, F::PRECISION) + low;

        if value < high {
            return value;
        }
    }
}

macro_rules! impl_sample_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl SampleUniform for $t {
                const DEFAULT_LOW: Self = 0.0;
                const DEFAULT_HIGH: Self = 1.0;

                /// `NaN` bounds are never valid. Neither is a range wider
                /// than the type can represent, whose samples would all be
                /// infinite.
                #[inline]
                fn is_valid_range(low: Self, high: Self) -> bool {
                    low < high && (high - low).is_finite()
                }

                #[inline]
                fn sample_valid<G: RawGenerator>(rng: &mut G, low: Self, high: Self) -> Self {
                    sample_float(rng, low, high)
                }
            }
        )*
    };
}

impl_sample_float!(f32, f64);
