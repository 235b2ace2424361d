//! # Random Number Generator
//!
//! Draws `count` integers uniformly from `[min, max]`, optionally without
//! repeats. Every run is seeded: a caller-supplied seed reproduces a previous
//! draw exactly; otherwise a fresh seed is taken from the thread RNG and
//! reported in the result so the draw can be repeated.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::random::{calculate, RandomInput};
//!
//! let input = RandomInput { min: 1, max: 6, count: 3, unique: false, seed: Some(42) };
//! let first = calculate(&input).unwrap();
//! let second = calculate(&input).unwrap();
//! assert_eq!(first.values, second.values);
//! assert!(first.values.iter().all(|v| (1..=6).contains(v)));
//! ```

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;

/// Largest number of values drawn at once
pub const MAX_COUNT: usize = 10_000;

fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomInput {
    pub min: i64,
    pub max: i64,

    #[serde(default = "default_count")]
    pub count: usize,

    /// Draw without repeats
    #[serde(default)]
    pub unique: bool,

    #[serde(default)]
    pub seed: Option<u64>,
}

impl RandomInput {
    /// Number of integers in `[min, max]`
    pub fn span(&self) -> u128 {
        (self.max as i128 - self.min as i128 + 1) as u128
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.min > self.max {
            return Err(CalcError::invalid_input(
                "max",
                self.max.to_string(),
                format!("Maximum must not be below the minimum ({})", self.min),
            ));
        }
        if !(1..=MAX_COUNT).contains(&self.count) {
            return Err(CalcError::invalid_input(
                "count",
                self.count.to_string(),
                format!("Count must be between 1 and {}", MAX_COUNT),
            ));
        }
        if self.unique && self.count as u128 > self.span() {
            return Err(CalcError::invalid_input(
                "count",
                self.count.to_string(),
                format!("Only {} distinct values exist between {} and {}", self.span(), self.min, self.max),
            ));
        }
        Ok(())
    }
}

impl FromFields for RandomInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        let count = match fields.optional_u64("count")? {
            Some(c) => usize::try_from(c)
                .map_err(|_| CalcError::invalid_input("count", c.to_string(), "Count is too large"))?,
            None => default_count(),
        };
        Ok(RandomInput {
            min: fields.require_i64("min")?,
            max: fields.require_i64("max")?,
            count,
            unique: fields.optional_bool("unique")?.unwrap_or(false),
            seed: fields.optional_u64("seed")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomResult {
    pub values: Vec<i64>,

    /// Seed that reproduces this draw
    pub seed: u64,

    pub unique: bool,
}

impl RandomResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let values: Vec<String> = self.values.iter().map(|v| fmt.integer(v)).collect();
        vec![values.join(", "), format!("Seed: {}", self.seed)]
    }
}

fn draw_unique(rng: &mut StdRng, input: &RandomInput) -> Vec<i64> {
    let span = input.span();
    let offset = |i: u128| (input.min as i128 + i as i128) as i64;
    // Dense draws sample indices directly; sparse draws reject repeats.
    if span <= 2 * input.count as u128 {
        return index::sample(rng, span as usize, input.count)
            .into_iter()
            .map(|i| offset(i as u128))
            .collect();
    }
    let mut seen = HashSet::with_capacity(input.count);
    let mut values = Vec::with_capacity(input.count);
    while values.len() < input.count {
        let v = rng.gen_range(input.min..=input.max);
        if seen.insert(v) {
            values.push(v);
        }
    }
    values
}

pub fn calculate(input: &RandomInput) -> CalcResult<RandomResult> {
    input.validate()?;
    let seed = input.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    let values = if input.unique {
        draw_unique(&mut rng, input)
    } else {
        (0..input.count)
            .map(|_| rng.gen_range(input.min..=input.max))
            .collect()
    };
    Ok(RandomResult {
        values,
        seed,
        unique: input.unique,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(min: i64, max: i64, count: usize, unique: bool) -> RandomInput {
        RandomInput { min, max, count, unique, seed: Some(7) }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = calculate(&input(-50, 50, 100, false)).unwrap();
        let b = calculate(&input(-50, 50, 100, false)).unwrap();
        assert_eq!(a.values, b.values);
        assert_eq!(a.seed, 7);
        assert!(a.values.iter().all(|v| (-50..=50).contains(v)));
    }

    #[test]
    fn test_generated_seed_reproduces_draw() {
        let mut unseeded = input(1, 1000, 5, false);
        unseeded.seed = None;
        let first = calculate(&unseeded).unwrap();
        unseeded.seed = Some(first.seed);
        assert_eq!(calculate(&unseeded).unwrap().values, first.values);
    }

    #[test]
    fn test_unique_dense_and_sparse() {
        for (min, max, count) in [(1, 10, 10), (1, 10, 6), (0, 1_000_000, 50)] {
            let result = calculate(&input(min, max, count, true)).unwrap();
            let distinct: HashSet<i64> = result.values.iter().copied().collect();
            assert_eq!(distinct.len(), count);
            assert!(result.values.iter().all(|v| (min..=max).contains(v)));
        }
    }

    #[test]
    fn test_limits() {
        assert_eq!(calculate(&input(1, 5, 6, true)).unwrap_err().field(), Some("count"));
        assert_eq!(calculate(&input(5, 1, 1, false)).unwrap_err().field(), Some("max"));
        assert!(calculate(&input(1, 5, 0, false)).is_err());
        // Full i64 range
        assert!(calculate(&input(i64::MIN, i64::MAX, 3, true)).is_ok());
    }

    #[test]
    fn test_from_fields_defaults() {
        let fields = FieldMap::parse_pairs(["min=1", "max=6"]).unwrap();
        let parsed = RandomInput::from_fields(&fields).unwrap();
        assert_eq!(parsed.count, 1);
        assert!(!parsed.unique);
        assert_eq!(parsed.seed, None);
    }
}
