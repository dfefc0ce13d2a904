//! # Random Source
//!
//! The noise generator never owns a random number generator. Callers hand
//! in anything implementing [`RandomSource`]; every [`rand::Rng`] already
//! does, so a seeded `StdRng` gives reproducible fields.

use rand::Rng;

/// Supplier of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a uniform integer in the closed range `[min, max]`.
    ///
    /// Callers guarantee `min <= max`.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }
}
