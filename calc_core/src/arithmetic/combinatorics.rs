//! # Factorials, Combinations, Permutations
//!
//! ```text
//! nCr = n! / (r! (n − r)!)
//! nPr = n! / (n − r)!
//! ```
//!
//! Counts are exact arbitrary-precision integers ([`ExactCount`]); 21! already
//! exceeds `u64`, so fixed-width arithmetic is never used for results.
//! `n` is bounded by [`MAX_N`] to keep a single request cheap.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CalcError, CalcResult};

/// Largest `n` accepted by the combinatorial functions
pub const MAX_N: u64 = 10_000;

/// A non-negative integer of arbitrary size.
///
/// Serializes as a decimal string so that JSON consumers never lose digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactCount(pub BigUint);

impl ExactCount {
    /// Number of decimal digits
    pub fn digits(&self) -> usize {
        if self.0.is_zero() {
            1
        } else {
            self.0.to_str_radix(10).len()
        }
    }

    /// Value as `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Approximate value as `f64` (infinite when out of range)
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::INFINITY)
    }
}

impl From<u64> for ExactCount {
    fn from(v: u64) -> Self {
        ExactCount(BigUint::from(v))
    }
}

impl fmt::Display for ExactCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ExactCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for ExactCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigUint::from_str(&s)
            .map(ExactCount)
            .map_err(serde::de::Error::custom)
    }
}

fn check_n(n: u64) -> CalcResult<()> {
    if n > MAX_N {
        return Err(CalcError::invalid_input(
            "n",
            n.to_string(),
            format!("n must be at most {}", MAX_N),
        ));
    }
    Ok(())
}

fn check_r(n: u64, r: u64) -> CalcResult<()> {
    check_n(n)?;
    if r > n {
        return Err(CalcError::invalid_input(
            "r",
            r.to_string(),
            format!("r cannot exceed n ({})", n),
        ));
    }
    Ok(())
}

/// n! for `n <= MAX_N`.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::factorial;
///
/// assert_eq!(factorial(5).unwrap().to_u64(), Some(120));
/// assert_eq!(factorial(25).unwrap().to_string(), "15511210043330985984000000");
/// ```
pub fn factorial(n: u64) -> CalcResult<ExactCount> {
    check_n(n)?;
    Ok(ExactCount(falling_product(n, n)))
}

/// Number of r-element subsets of an n-element set.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::n_choose_r;
///
/// assert_eq!(n_choose_r(5, 2).unwrap().to_u64(), Some(10));
/// assert!(n_choose_r(2, 5).is_err());
/// ```
pub fn n_choose_r(n: u64, r: u64) -> CalcResult<ExactCount> {
    check_r(n, r)?;
    let k = r.min(n - r);
    let mut acc = BigUint::one();
    // Each partial product is itself a binomial coefficient, so the division is exact.
    for i in 1..=k {
        acc *= BigUint::from(n - k + i);
        acc /= BigUint::from(i);
    }
    Ok(ExactCount(acc))
}

/// Number of ordered r-element arrangements from an n-element set.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::n_permute_r;
///
/// assert_eq!(n_permute_r(5, 2).unwrap().to_u64(), Some(20));
/// ```
pub fn n_permute_r(n: u64, r: u64) -> CalcResult<ExactCount> {
    check_r(n, r)?;
    Ok(ExactCount(falling_product(n, r)))
}

/// n × (n−1) × … × (n−count+1)
fn falling_product(n: u64, count: u64) -> BigUint {
    (0..count).fold(BigUint::one(), |acc, i| acc * BigUint::from(n - i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(factorial(0).unwrap().to_u64(), Some(1));
        assert_eq!(factorial(20).unwrap().to_u64(), Some(2_432_902_008_176_640_000));
        assert_eq!(n_choose_r(5, 0).unwrap().to_u64(), Some(1));
        assert_eq!(n_choose_r(52, 5).unwrap().to_u64(), Some(2_598_960));
        assert_eq!(n_permute_r(10, 3).unwrap().to_u64(), Some(720));
        assert_eq!(n_permute_r(0, 0).unwrap().to_u64(), Some(1));
    }

    #[test]
    fn test_symmetry_and_permutation_identity() {
        for n in 0..40u64 {
            for r in 0..=n {
                let c = n_choose_r(n, r).unwrap();
                assert_eq!(c, n_choose_r(n, n - r).unwrap());
                let p = n_permute_r(n, r).unwrap();
                assert_eq!(p.0, c.0.clone() * factorial(r).unwrap().0);
                assert!(p >= c);
            }
        }
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(n_choose_r(3, 4).unwrap_err().field(), Some("r"));
        assert_eq!(factorial(MAX_N + 1).unwrap_err().field(), Some("n"));
    }

    #[test]
    fn test_large_counts_are_exact() {
        let c = n_choose_r(100, 50).unwrap();
        assert_eq!(c.to_string(), "100891344545564193334812497256");
        assert_eq!(c.digits(), 30);
        assert_eq!(c.to_u64(), None);
    }

    #[test]
    fn test_serializes_as_string() {
        let c = n_choose_r(5, 2).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"10\"");
        let back: ExactCount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
