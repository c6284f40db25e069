//! Seedable random sources used to build noise permutation tables.
//!
//! The noise constructors take `&mut impl Random` so callers control
//! reproducibility: a fixed seed pins the generated table for tests, while
//! [`Xoroshiro::from_entropy`] reproduces the legacy behavior of drawing a
//! fresh table on every run.

pub mod xoroshiro;

pub use xoroshiro::Xoroshiro;

/// A deterministic pseudo-random source.
pub trait Random {
    /// Next 64 uniformly random bits.
    fn next_u64(&mut self) -> u64;

    /// Uniform `f64` in `[0, 1)` with 53 bits of precision.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * 1.110_223_024_625_156_5E-16
    }

    /// Uniform `i32` in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    #[inline]
    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive");
        let bound = bound as u64;
        // Multiply-shift rejection sampling (Lemire); the rejection loop only
        // runs for the biased low-word values.
        let mut product = u64::from(self.next_u32()) * bound;
        let mut low = product & 0xFFFF_FFFF;
        if low < bound {
            let threshold = (bound.wrapping_neg() & 0xFFFF_FFFF) % bound;
            while low < threshold {
                product = u64::from(self.next_u32()) * bound;
                low = product & 0xFFFF_FFFF;
            }
        }
        (product >> 32) as i32
    }

    /// Next 32 uniformly random bits (upper half of [`Random::next_u64`]).
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}
