//! Uniform random sampling for Nebula
//!
//! This crate turns an abstract, infinite stream of fixed-width unsigned
//! words (a *raw generator*) into statistically correct uniform values:
//! integers over any closed range, floats over any half-open range, and
//! raw bit strings of any width, all without modulo bias.
//!
//! # Module overview
//!
//! - `entropy`  
//!   Cryptographically secure bytes from the operating system, used to
//!   seed generators. The platform backend is chosen at compile time;
//!   failure is reported as `None`, never as a panic.
//!
//! - `primitives`  
//!   The word traits (`UnsignedWord`, `SignedWord`, `Float`) every
//!   algorithm in the crate is generic over.
//!
//! - `rng`  
//!   The `RawGenerator` trait, the derivation of usable bits per draw, bit
//!   composition, and two concrete generators (xorshift64* and ChaCha20).
//!
//! - `uniform`  
//!   Rejection-sampled uniform integers, composed uniform floats, and
//!   bounded lazy sequences of either, exposed through the `Uniform`
//!   extension trait.
//!
//! - `shared`  
//!   A mutex wrapper for generators used by several owners.
//!
//! # Example
//!
//! ```
//! use nebula_random::rng::{ChaCha20Rng, RawGenerator};
//! use nebula_random::uniform::Uniform;
//!
//! let mut rng = ChaCha20Rng::from_state([7u8; 32]);
//!
//! let index: usize = rng.uniform_in(0, 9);
//! let weight: f64 = rng.uniform();
//! let nibble: u8 = rng.bits(4);
//!
//! assert!(index <= 9);
//! assert!((0.0..1.0).contains(&weight));
//! assert!(nibble < 16);
//! ```
//!
//! # Design goals
//!
//! - Exact uniformity: every value of a range is equally likely
//! - Caller-controlled precision for bit strings and floats
//! - Generators are plain owned values; no hidden global state
//! - Entropy is only touched when seeding
//!
//! The uniform output is exactly as strong as the generator behind it.
//! Only the seeding path is required to be cryptographically secure.

mod os;

pub mod entropy;
pub mod error;
pub mod primitives;
pub mod rng;
pub mod shared;
pub mod uniform;
