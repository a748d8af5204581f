#![allow(dead_code)]

use nebula_random::entropy::EntropySource;
use nebula_random::error::EntropyError;
use nebula_random::rng::{RawGenerator, Xorshift64Star};

/// Replays a fixed list of words, cycling, over the declared `[LO, HI]`.
#[derive(Debug, Clone)]
pub struct Scripted<const LO: u8, const HI: u8> {
    words: Vec<u8>,
    index: usize,
    pub draws: usize,
}

impl<const LO: u8, const HI: u8> RawGenerator for Scripted<LO, HI> {
    type State = Vec<u8>;
    type Word = u8;

    const MIN: u8 = LO;
    const MAX: u8 = HI;

    fn from_state(words: Vec<u8>) -> Self {
        assert!(!words.is_empty());
        Self {
            words,
            index: 0,
            draws: 0,
        }
    }

    fn next_word(&mut self) -> u8 {
        let word = self.words[self.index % self.words.len()];
        self.index += 1;
        self.draws += 1;
        word
    }
}

/// Full-range 8-bit generator.
pub type Scripted8 = Scripted<0, 255>;

/// Pseudo-random generator over `[LO, HI]` with an 8-bit native word.
///
/// Draws are taken from the top byte of xorshift64* by rejection, so every
/// value of the declared range is equally likely.
#[derive(Debug, Clone)]
pub struct Narrow<const LO: u8, const HI: u8> {
    inner: Xorshift64Star,
}

impl<const LO: u8, const HI: u8> Narrow<LO, HI> {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Xorshift64Star::new(seed),
        }
    }
}

impl<const LO: u8, const HI: u8> RawGenerator for Narrow<LO, HI> {
    type State = [u8; 8];
    type Word = u8;

    const MIN: u8 = LO;
    const MAX: u8 = HI;

    fn from_state(state: [u8; 8]) -> Self {
        Self {
            inner: Xorshift64Star::from_state(state),
        }
    }

    fn next_word(&mut self) -> u8 {
        let cardinality = (HI - LO) as u16 + 1;
        let zone = 256 - (256 % cardinality);

        loop {
            let top = (self.inner.next_word() >> 56) as u16;
            if top < zone {
                return LO + (top % cardinality) as u8;
            }
        }
    }
}

/// Full-range 8-bit pseudo-random generator.
pub type Byte = Narrow<0, 255>;

/// 4-bit generator (`[0, 15]`) in an 8-bit word.
pub type Nibble = Narrow<0, 15>;

/// Ten outputs (`[3, 12]`): three usable bits per draw.
pub type Decimal = Narrow<3, 12>;

/// Entropy source that always reports the pool as unavailable.
#[derive(Debug, Default)]
pub struct Unavailable {
    pub calls: usize,
}

impl EntropySource for Unavailable {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.calls += 1;
        dest.iter_mut().for_each(|b| *b = 0xAA);
        Err(EntropyError::Unavailable)
    }
}

/// Entropy source that yields a fixed byte.
#[derive(Debug)]
pub struct Constant(pub u8);

impl EntropySource for Constant {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        dest.fill(self.0);
        Ok(())
    }
}

/// Full-range generator with a 128-bit word: two xorshift64* outputs.
#[derive(Debug, Clone)]
pub struct Wide {
    inner: Xorshift64Star,
}

impl Wide {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Xorshift64Star::new(seed),
        }
    }
}

impl RawGenerator for Wide {
    type State = [u8; 8];
    type Word = u128;

    fn from_state(state: [u8; 8]) -> Self {
        Self {
            inner: Xorshift64Star::from_state(state),
        }
    }

    fn next_word(&mut self) -> u128 {
        let high = self.inner.next_word() as u128;
        let low = self.inner.next_word() as u128;
        high << 64 | low
    }
}
