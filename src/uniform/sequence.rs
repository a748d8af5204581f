//! Bounded sequences of uniform draws.

use std::iter::FusedIterator;

use super::SampleUniform;
use crate::rng::RawGenerator;

/// A finite, lazily evaluated sequence of uniform draws.
///
/// Each call to `next` performs one draw on the borrowed generator, so the
/// sequence cannot be restarted: iterating it again would continue the
/// generator rather than replay earlier values. After `count` elements it
/// is exhausted for good.
///
/// Created by [`Uniform::uniform_iter`](super::Uniform::uniform_iter) and
/// [`Uniform::uniform_in_iter`](super::Uniform::uniform_in_iter).
#[derive(Debug)]
pub struct Sequence<'a, G, T> {
    rng: &'a mut G,
    low: T,
    high: T,
    remaining: usize,
}

impl<'a, G: RawGenerator, T: SampleUniform> Sequence<'a, G, T> {
    /// The range must already be validated.
    pub(crate) fn new(rng: &'a mut G, low: T, high: T, count: usize) -> Self {
        Self {
            rng,
            low,
            high,
            remaining: count,
        }
    }
}

impl<G: RawGenerator, T: SampleUniform> Iterator for Sequence<'_, G, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        Some(T::sample_valid(&mut *self.rng, self.low, self.high))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<G: RawGenerator, T: SampleUniform> ExactSizeIterator for Sequence<'_, G, T> {}

impl<G: RawGenerator, T: SampleUniform> FusedIterator for Sequence<'_, G, T> {}
