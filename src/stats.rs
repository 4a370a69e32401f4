//! Derived views of a population.
//!
//! Everything here is a pure function of the population. The sampler keeps a
//! single [`DerivedStats`] memo and throws it away whenever the population is
//! replaced.

use crate::choice::Choice;

/// Cached, index-aligned statistics for a population.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStats {
    pub weights: Vec<f64>,
    pub cumulative_weights: Vec<f64>,
    pub total_weight: f64,
    pub is_uniform: bool,
    pub normalized_weights: Vec<f64>,
    pub normalized_cumulative_weights: Vec<f64>,
}

impl DerivedStats {
    pub fn compute<T>(population: &[Choice<T>]) -> Self {
        let weights: Vec<f64> = population.iter().map(Choice::weight).collect();
        let cumulative_weights = running_sum(&weights);
        let total_weight: f64 = weights.iter().sum();

        // Exact comparison: only identical weights take the uniform fast path.
        let is_uniform = match weights.split_first() {
            Some((first, rest)) => rest.iter().all(|w| w == first),
            None => true,
        };

        let normalized_weights: Vec<f64> = if total_weight > 0.0 {
            weights.iter().map(|w| w / total_weight).collect()
        } else {
            Vec::new()
        };
        let normalized_cumulative_weights = running_sum(&normalized_weights);

        log::debug!(
            "computed stats: n={}, total_weight={}, uniform={}",
            weights.len(),
            total_weight,
            is_uniform
        );

        Self {
            weights,
            cumulative_weights,
            total_weight,
            is_uniform,
            normalized_weights,
            normalized_cumulative_weights,
        }
    }

    /// Index of the interval `r` falls into, bisecting `normalized_cumulative_weights`.
    ///
    /// Returns the leftmost position such that everything before it is `<= r`, searching
    /// only `[0, n - 1]` so the result is always a valid index. Call on non-empty stats only.
    #[inline]
    pub fn bisect(&self, r: f64) -> usize {
        let n = self.normalized_cumulative_weights.len();
        self.normalized_cumulative_weights[..n.saturating_sub(1)].partition_point(|&c| c <= r)
    }
}

fn running_sum(xs: &[f64]) -> Vec<f64> {
    xs.iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}
