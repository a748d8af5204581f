//! Fixed-width signed integer words.

use std::fmt::Debug;

use super::UnsignedWord;

/// A fixed-width two's complement signed integer.
///
/// Every signed word is paired with the unsigned word of the same width,
/// its `Magnitude`. Distances between signed values are always measured in
/// the magnitude type, where they cannot overflow.
pub trait SignedWord: Copy + Debug + Ord + Send + Sync + 'static {
    /// Unsigned type of the same width.
    type Magnitude: UnsignedWord;

    const MIN: Self;
    const MAX: Self;

    fn is_negative(self) -> bool;

    /// Absolute value as the magnitude type (total, including `MIN`).
    fn unsigned_abs(self) -> Self::Magnitude;

    /// Reinterprets the two's complement bit pattern as the magnitude type.
    fn to_bits(self) -> Self::Magnitude;

    /// Reinterprets a magnitude bit pattern as a signed value.
    fn from_bits(bits: Self::Magnitude) -> Self;

    /// Distance `high − low` as an unsigned magnitude.
    ///
    /// `low <= high` is required. When the bounds straddle zero the
    /// distance is the sum of both magnitudes; when they share a sign it is
    /// the difference of their magnitudes. Neither case overflows.
    fn span(low: Self, high: Self) -> Self::Magnitude {
        match (low.is_negative(), high.is_negative()) {
            (true, false) => low.unsigned_abs() + high.unsigned_abs(),
            (true, true) => low.unsigned_abs() - high.unsigned_abs(),
            _ => high.unsigned_abs() - low.unsigned_abs(),
        }
    }

    /// Returns `self + offset`, where the sum is known to be representable.
    fn offset_by(self, offset: Self::Magnitude) -> Self {
        Self::from_bits(self.to_bits().wrapping_add(offset))
    }
}

macro_rules! impl_signed_word {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl SignedWord for $t {
                type Magnitude = $u;

                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn unsigned_abs(self) -> $u {
                    <$t>::unsigned_abs(self)
                }

                #[inline]
                fn to_bits(self) -> $u {
                    self as $u
                }

                #[inline]
                fn from_bits(bits: $u) -> Self {
                    bits as $t
                }
            }
        )*
    };
}

impl_signed_word!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);
