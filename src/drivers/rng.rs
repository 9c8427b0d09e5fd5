use rand::{Rng, RngCore};

/// Source of uniform random choices for stimulus selection and delays.
pub trait Chance {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
    /// Uniform value between `lo` and `hi` inclusive, in either order.
    fn between(&mut self, lo: u32, hi: u32) -> u32;
}

/// [`Chance`] backed by any `rand` generator.
pub struct RandomChance<R> {
    rng: R,
}

impl<R: RngCore> RandomChance<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> Chance for RandomChance<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn between(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo.min(hi)..=lo.max(hi))
    }
}
