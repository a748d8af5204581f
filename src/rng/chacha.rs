//! ChaCha20 keystream generator
//!
//! A raw generator that emits the ChaCha20 keystream one 32-bit word at a
//! time. Its state is a 256-bit key; the nonce is fixed to zero and a block
//! counter selects the keystream position.
//!
//! When the block counter is exhausted the generator rekeys itself from the
//! next keystream block, so a single key never produces more than 2³²
//! blocks.

use super::RawGenerator;
use super::chacha20::{block, key_words};

/// Words per keystream block.
const BLOCK_WORDS: usize = 16;

/// ChaCha20-based raw generator producing full-range `u32` words.
///
/// Construct it with [`RawGenerator::from_state`] from a 32-byte key, or
/// with [`RawGenerator::from_entropy`] for an OS-seeded instance.
///
/// Cloning duplicates the state: the clone replays the original's future
/// output.
#[derive(Clone)]
pub struct ChaCha20Rng {
    /// Key words (256-bit)
    key: [u32; 8],

    /// Counter of the next block to generate
    counter: u32,

    /// Current keystream block
    buffer: [u32; BLOCK_WORDS],

    /// Next unread word of `buffer`
    index: usize,
}

impl ChaCha20Rng {
    const NONCE: [u32; 3] = [0; 3];

    fn refill(&mut self) {
        if self.counter == u32::MAX {
            self.rekey();
        }

        self.buffer = block(&self.key, self.counter, &Self::NONCE);
        self.counter += 1;
        self.index = 0;
    }

    /// Replaces the key with the first half of the final keystream block
    /// and restarts the counter.
    fn rekey(&mut self) {
        let next = block(&self.key, self.counter, &Self::NONCE);

        self.key.copy_from_slice(&next[..8]);
        self.counter = 0;
    }
}

impl RawGenerator for ChaCha20Rng {
    type State = [u8; 32];
    type Word = u32;

    fn from_state(mut state: [u8; 32]) -> Self {
        let key = key_words(&state);
        state.fill(0);

        Self {
            key,
            counter: 0,
            buffer: [0; BLOCK_WORDS],
            index: BLOCK_WORDS,
        }
    }

    fn next_word(&mut self) -> u32 {
        if self.index == BLOCK_WORDS {
            self.refill();
        }

        let word = self.buffer[self.index];
        self.index += 1;

        word
    }
}

impl std::fmt::Debug for ChaCha20Rng {
    /// The key is never printed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChaCha20Rng")
            .field("counter", &self.counter)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
