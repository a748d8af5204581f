//! Fixed-width unsigned integer words.

use std::fmt::Debug;
use std::ops::{Add, BitAnd, BitOr, Shl, Shr, Sub};

/// A fixed-width unsigned integer.
///
/// This is the native output type of a raw generator and the target type
/// of bit composition. All conversions between words go through `u128`,
/// which is wide enough to hold every implementor.
pub trait UnsignedWord:
    Copy
    + Debug
    + Eq
    + Ord
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the type in bits.
    const BITS: u32;

    /// The value zero.
    const ZERO: Self;

    /// The value one.
    const ONE: Self;

    /// The maximum representable value (2^BITS − 1).
    const MAX: Self;

    /// Number of zero bits above the most significant one bit.
    fn leading_zeros(self) -> u32;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Widens the value to `u128`.
    fn to_u128(self) -> u128;

    /// Keeps the low `BITS` bits of `value`.
    fn truncate_from(value: u128) -> Self;

    /// Decodes a little-endian slice of exactly `BITS / 8` bytes.
    ///
    /// # Panics
    /// Panics if the slice length does not match the word size.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Returns a value with the low `bits` bits set.
    ///
    /// `bits >= BITS` yields [`UnsignedWord::MAX`].
    fn low_mask(bits: u32) -> Self {
        if bits >= Self::BITS {
            Self::MAX
        } else {
            (Self::ONE << bits) - Self::ONE
        }
    }

    /// Converts to another word width, truncating if it is narrower.
    fn cast<T: UnsignedWord>(self) -> T {
        T::truncate_from(self.to_u128())
    }
}

macro_rules! impl_unsigned_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl UnsignedWord for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn truncate_from(value: u128) -> Self {
                    value as $t
                }

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);

                    <$t>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_unsigned_word!(u8, u16, u32, u64, u128, usize);
