//! Weighted sampling with and without replacement.
//!
//! [`Randomizer`] owns a population of [`Choice`]s and an injected
//! [`UniformSource`]. Derived statistics (cumulative and normalized weights,
//! total weight, uniformity) are computed on first read and memoized in a single
//! [`DerivedStats`] value; replacing the population resets that memo before the
//! new population is installed.
//!
//! Two samplers are provided:
//!
//! - **With replacement**: inverse-CDF sampling. A uniform draw `r` selects the
//!   interval of `normalized_cumulative_weights` it lands in (binary search), so
//!   index `i` comes up with probability `normalized_weights[i]`. When every
//!   weight is identical this reduces to `floor(r * n)`.
//! - **Without replacement**: successive linear scans over the unnormalized
//!   weights of a working copy, removing each picked entry. O(k * n).
//!
//! Neither sampler fails: an empty or exhausted population just yields fewer
//! values than requested.

use std::cell::OnceCell;

use rand::rngs::StdRng;

use crate::choice::{Choice, ChoiceError};
use crate::source::{RngSource, UniformSource};
use crate::stats::DerivedStats;

/// Picks values from a population according to their relative weights.
#[derive(Debug, Clone)]
pub struct Randomizer<T, S = RngSource<StdRng>> {
    population: Vec<Choice<T>>,
    stats: OnceCell<DerivedStats>,
    source: S,
}

impl<T> Randomizer<T> {
    /// Empty sampler drawing from a `StdRng` seeded off the thread RNG.
    pub fn new() -> Self {
        Self::with_source(RngSource::default())
    }

    /// Empty sampler with a reproducible `StdRng` source.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }

    /// Build from `(value, weight)` pairs, failing on the first invalid weight.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ChoiceError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let population = pairs
            .into_iter()
            .map(Choice::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new().with_population(population))
    }

    /// Every value gets weight `1.0`.
    pub fn uniform<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let population = values.into_iter().map(Choice::uniform).collect();
        Self::new().with_population(population)
    }
}

impl<T> Default for Randomizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: UniformSource> Randomizer<T, S> {
    /// Empty sampler drawing from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            population: Vec::new(),
            stats: OnceCell::new(),
            source,
        }
    }

    /// Set the initial population.
    pub fn with_population(mut self, population: Vec<Choice<T>>) -> Self {
        self.set_population(population);
        self
    }

    pub fn population(&self) -> &[Choice<T>] {
        &self.population
    }

    /// Replace the population. Cached statistics are dropped first.
    pub fn set_population(&mut self, population: Vec<Choice<T>>) {
        self.stats.take();
        log::debug!(
            "replacing population: {} -> {} choices",
            self.population.len(),
            population.len()
        );
        self.population = population;
    }

    pub fn into_population(self) -> Vec<Choice<T>> {
        self.population
    }

    /// Number of entries in the population.
    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn set_source(&mut self, source: S) {
        self.source = source;
    }

    /// Derived statistics for the current population, computed on first access.
    pub fn stats(&self) -> &DerivedStats {
        self.stats.get_or_init(|| DerivedStats::compute(&self.population))
    }

    /// Index-aligned weights.
    pub fn weights(&self) -> &[f64] {
        &self.stats().weights
    }

    /// Index-aligned values.
    pub fn return_values(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.population.iter().map(Choice::value)
    }

    /// True for fewer than two entries, or when every weight equals the first.
    pub fn is_uniform(&self) -> bool {
        self.stats().is_uniform
    }

    pub fn cumulative_weights(&self) -> &[f64] {
        &self.stats().cumulative_weights
    }

    pub fn total_weight(&self) -> f64 {
        self.stats().total_weight
    }

    /// Whether there is any weight left to pick from.
    ///
    /// Defined on the total weight rather than the entry count. With strictly
    /// positive weights the two agree.
    pub fn is_empty(&self) -> bool {
        self.total_weight() <= 0.0
    }

    /// Weights scaled to sum to 1.0. Empty for an empty population.
    pub fn normalized_weights(&self) -> &[f64] {
        &self.stats().normalized_weights
    }

    /// Running sum of [`normalized_weights`](Self::normalized_weights); the last
    /// element is 1.0 up to rounding.
    pub fn normalized_cumulative_weights(&self) -> &[f64] {
        &self.stats().normalized_cumulative_weights
    }

    /// Draw `k` indices independently, proportionally to weight.
    ///
    /// Returns an empty vector when the sampler is empty, whatever `k` is.
    pub fn sample_indices_with_replacement(&mut self, k: usize) -> Vec<usize> {
        let Self {
            population,
            stats,
            source,
        } = self;
        let population: &[Choice<T>] = population;
        let stats = stats.get_or_init(|| DerivedStats::compute(population));

        if stats.total_weight <= 0.0 {
            return Vec::new();
        }

        let n = population.len();
        if stats.is_uniform {
            log::trace!("with replacement, uniform path: n={n}, k={k}");
            (0..k)
                .map(|_| {
                    let r = source.next_unit();
                    // A source returning exactly 1.0 must not index past the end.
                    ((r * n as f64).floor() as usize).min(n - 1)
                })
                .collect()
        } else {
            log::trace!("with replacement, weighted path: n={n}, k={k}");
            (0..k).map(|_| stats.bisect(source.next_unit())).collect()
        }
    }

    /// Draw `k` values independently, proportionally to weight.
    ///
    /// The population is left untouched.
    pub fn sample_with_replacement(&mut self, k: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.sample_indices_with_replacement(k)
            .into_iter()
            .map(|i| self.population[i].value().clone())
            .collect()
    }

    /// Draw up to `k` entries, each at most once, proportionally to the weight still
    /// in play.
    ///
    /// Picks are made from a working copy. With `replenish == false` the working copy
    /// (everything not picked) becomes the new population once the call finishes;
    /// with `replenish == true` the population is left as it was.
    ///
    /// Returns fewer than `k` values once the remaining weight runs out.
    pub fn sample_without_replacement(&mut self, k: usize, replenish: bool) -> Vec<T>
    where
        T: Clone,
    {
        if self.is_empty() {
            return Vec::new();
        }

        let mut remaining = self.population.clone();
        let mut picked = Vec::with_capacity(k.min(remaining.len()));

        for _ in 0..k {
            let total: f64 = remaining.iter().map(Choice::weight).sum();
            if total <= 0.0 {
                log::debug!(
                    "without replacement: exhausted after {} of {k} picks",
                    picked.len()
                );
                break;
            }

            let target = total * self.source.next_unit();
            let idx = scan_index(&remaining, target);
            log::trace!("without replacement: picked index {idx} of {}", remaining.len());
            picked.push(remaining.remove(idx).into_value());
        }

        if !replenish {
            self.set_population(remaining);
        }

        picked
    }
}

/// Walk `choices` subtracting weights from `target` until it is no longer positive.
///
/// A target that is not positive to begin with picks the last entry, as does a
/// target that rounding leaves positive after the last entry. `choices` must be
/// non-empty.
fn scan_index<T>(choices: &[Choice<T>], mut target: f64) -> usize {
    let last = choices.len() - 1;
    if target <= 0.0 {
        return last;
    }
    for (i, choice) in choices.iter().enumerate() {
        target -= choice.weight();
        if target <= 0.0 {
            return i;
        }
    }
    last
}
