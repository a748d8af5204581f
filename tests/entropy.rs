mod common;

use common::{Constant, Unavailable};
use nebula_random::entropy::{EntropySource, OsEntropy};
use nebula_random::rng::{ChaCha20Rng, RawGenerator, Xorshift64Star};

#[test]
fn test_entropy_os_returns_exact_length() {
    let bytes = OsEntropy.fetch(48).expect("os entropy available");

    assert_eq!(bytes.len(), 48);
}

#[test]
fn test_entropy_os_not_all_zero() {
    let bytes = OsEntropy.fetch(64).expect("os entropy available");

    assert!(bytes.iter().any(|&b| b != 0));
}

#[test]
fn test_entropy_os_fetch_words() {
    let words: Vec<u32> = OsEntropy.fetch_words(5).expect("os entropy available");

    assert_eq!(words.len(), 5);
}

#[test]
fn test_entropy_fetch_words_decodes_little_endian() {
    let words: Vec<u16> = Constant(0x01).fetch_words(3).unwrap();

    assert_eq!(words, vec![0x0101; 3]);
}

#[test]
fn test_entropy_unavailable_source_fetch_is_none() {
    let mut source = Unavailable::default();

    assert_eq!(source.fetch(32), None);
    assert_eq!(source.calls, 1);
}

#[test]
fn test_entropy_unavailable_source_leaves_buffer_untouched() {
    let mut dest = [0x55u8; 24];

    assert!(Unavailable::default().fill(&mut dest).is_none());
    assert_eq!(dest, [0x55u8; 24]);
}

#[test]
fn test_entropy_seeding_from_unavailable_source_is_none() {
    let mut source = Unavailable::default();

    assert!(ChaCha20Rng::from_entropy_source(&mut source).is_none());
    assert!(Xorshift64Star::from_entropy_source(&mut source).is_none());
    assert_eq!(source.calls, 2);
}

#[test]
fn test_entropy_seeding_from_source_uses_its_bytes() {
    let mut seeded = ChaCha20Rng::from_entropy_source(Constant(0x42)).unwrap();
    let mut explicit = ChaCha20Rng::from_state([0x42u8; 32]);

    for _ in 0..40 {
        assert_eq!(seeded.next_word(), explicit.next_word());
    }
}

#[test]
fn test_entropy_os_seeded_generators_differ() {
    let mut a = ChaCha20Rng::from_entropy().expect("os entropy available");
    let mut b = ChaCha20Rng::from_entropy().expect("os entropy available");

    let first: Vec<u32> = (0..8).map(|_| a.next_word()).collect();
    let second: Vec<u32> = (0..8).map(|_| b.next_word()).collect();

    assert_ne!(first, second);
}
