//! Uniform random sources.
//!
//! Samplers never reach for a global generator: they draw from an injected
//! [`UniformSource`]. Any `FnMut() -> f64` closure is a source, which keeps tests
//! fully deterministic, and [`RngSource`] adapts a `rand` generator.

use rand::prelude::*;

/// Something that yields floats in `[0, 1)`, one per call.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> UniformSource for F {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// A [`UniformSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RngSource<StdRng> {
    /// Seeded from the thread-local generator; not reproducible across runs.
    fn default() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
