//! Weighted categorical sampling
//!
//! Every categorical field of a synthetic buyer is drawn from a table of
//! `(value, weight)` pairs. Weights are relative: a table does not have to
//! sum to 100, only the ratio between entries matters within one draw.
//!
//! The first entry of a table is treated as its modal option. When the
//! cumulative walk falls through (zero total weight, floating point rounding)
//! the draw resolves to that first entry.

use anyhow::{ensure, Result};
use rand::Rng;

/// Ordered discrete distribution over `T`
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T> WeightedTable<T> {
    /// Build a table, rejecting empty input, negative or non-finite weights
    /// and weights whose sum is not finite
    pub fn new(entries: Vec<(T, f64)>) -> Result<Self> {
        ensure!(!entries.is_empty(), "weighted table must have at least one entry");
        for (i, (_, weight)) in entries.iter().enumerate() {
            ensure!(
                weight.is_finite() && *weight >= 0.0,
                "weight at position {} must be a non-negative number, got {}",
                i,
                weight
            );
        }
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        ensure!(total.is_finite(), "total weight overflows: {}", total);
        Ok(Self { entries, total })
    }

    /// Table where every value has the same weight
    pub fn uniform(values: Vec<T>) -> Result<Self> {
        Self::new(values.into_iter().map(|v| (v, 1.0)).collect())
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The modal option, returned when a draw falls through
    pub fn first(&self) -> &T {
        &self.entries[0].0
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(v, _)| v)
    }

    /// Draw one value with probability proportional to its weight
    pub fn choose(&self, rng: &mut impl Rng) -> &T {
        let roll = rng.gen::<f64>() * self.total;
        self.resolve(roll)
    }

    /// Walk the cumulative weights until the running sum exceeds `roll`
    pub fn resolve(&self, roll: f64) -> &T {
        let mut cumulative = 0.0;
        for (value, weight) in &self.entries {
            cumulative += weight;
            if cumulative > roll {
                return value;
            }
        }
        self.first()
    }
}

impl<T: Clone> WeightedTable<T> {
    pub fn sample(&self, rng: &mut impl Rng) -> T {
        self.choose(rng).clone()
    }
}

/// Builds a table from compiled-in `(value, weight)` literals
///
/// Only used for static tables, which are non-empty with non-negative weights.
pub(crate) fn table<T: Clone>(entries: &[(T, f64)]) -> WeightedTable<T> {
    let total = entries.iter().map(|(_, w)| w).sum();
    WeightedTable {
        entries: entries.to_vec(),
        total,
    }
}

/// Inclusive integer draw in `[min, max]`
pub fn random_int(min: u8, max: u8, rng: &mut impl Rng) -> u8 {
    rng.gen_range(min..=max)
}

/// Pick one element of a non-empty slice uniformly
pub fn pick_uniform<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.gen_range(0..items.len())])
}
