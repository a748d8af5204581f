//! Primitive word types
//!
//! This module defines the numeric capabilities the sampling machinery is
//! written against. Generators, bit composition and the uniform
//! distributions are generic over these traits rather than over concrete
//! integer or float types.
//!
//! Current primitives include:
//! - `UnsignedWord`: fixed-width unsigned integers (`u8` to `u128`, `usize`)
//! - `SignedWord`: fixed-width signed integers paired with their unsigned
//!   magnitude type
//! - `Float`: binary floating-point types (`f32`, `f64`)

mod float;
mod signed;
mod unsigned;

pub use float::Float;
pub use signed::SignedWord;
pub use unsigned::UnsignedWord;
