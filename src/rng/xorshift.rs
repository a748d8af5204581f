//! xorshift64* generator
//!
//! A fast, non-cryptographic generator with 64 bits of state that passes
//! TestU01's BigCrush. Same state, same sequence.

use super::RawGenerator;

/// Multiplier applied to the xorshift state on output.
const MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

/// xorshift64* raw generator producing full-range `u64` words.
///
/// # Example
/// ```
/// use nebula_random::rng::{RawGenerator, Xorshift64Star};
///
/// let mut a = Xorshift64Star::new(12345);
/// let mut b = Xorshift64Star::from_state(12345u64.to_le_bytes());
/// assert_eq!(a.next_word(), b.next_word());
/// ```
#[derive(Debug, Clone)]
pub struct Xorshift64Star {
    state: u64,
}

impl Xorshift64Star {
    /// Creates a generator from a numeric seed.
    ///
    /// xorshift cannot leave the all-zero state, so a zero seed is replaced
    /// by one.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RawGenerator for Xorshift64Star {
    type State = [u8; 8];
    type Word = u64;

    fn from_state(state: [u8; 8]) -> Self {
        Self::new(u64::from_le_bytes(state))
    }

    fn next_word(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;

        x.wrapping_mul(MULTIPLIER)
    }
}
