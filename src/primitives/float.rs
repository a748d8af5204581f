//! Binary floating-point types.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// A binary floating-point type that uniform values can be composed into.
pub trait Float:
    Copy
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Number of significant bits, including the implicit leading bit.
    ///
    /// The implicit bit counts: a quotient of this many random bits is still
    /// exact, one more is not.
    const PRECISION: u32;

    /// Nearest representable value to `value`.
    fn from_u128(value: u128) -> Self;

    fn is_finite(self) -> bool;
}

impl Float for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const PRECISION: u32 = f32::MANTISSA_DIGITS;

    #[inline]
    fn from_u128(value: u128) -> Self {
        value as f32
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Float for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const PRECISION: u32 = f64::MANTISSA_DIGITS;

    #[inline]
    fn from_u128(value: u128) -> Self {
        value as f64
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
