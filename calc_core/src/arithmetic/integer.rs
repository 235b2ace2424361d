//! # Greatest Common Divisor / Least Common Multiple
//!
//! Euclidean reduction on unsigned integers:
//!
//! ```text
//! gcd(a, 0) = a
//! gcd(a, b) = gcd(b, a mod b)
//! lcm(a, b) = a / gcd(a, b) × b
//! ```
//!
//! ## Zero Convention
//!
//! `gcd(0, 0)` is mathematically undefined. These primitives return 0 so that
//! 0 acts as the identity when folding over a list ([`gcd_all`]). Calculators
//! that expose a GCD to users reject an all-zero input set before calling in.

/// Greatest common divisor by Euclidean reduction.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::gcd;
///
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(17, 0), 17);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, or `None` if the result overflows `u64`.
///
/// `lcm(a, 0)` is 0.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::lcm;
///
/// assert_eq!(lcm(48, 18), Some(144));
/// assert_eq!(lcm(u64::MAX, 2), None);
/// ```
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// GCD of every value in the slice (0 for an empty or all-zero slice).
pub fn gcd_all(values: &[u64]) -> u64 {
    values.iter().fold(0, |acc, &v| gcd(acc, v))
}

/// LCM of every value in the slice by iterative pairwise reduction.
///
/// Returns `Some(1)` for an empty slice and `None` on overflow.
pub fn lcm_all(values: &[u64]) -> Option<u64> {
    values.iter().try_fold(1u64, |acc, &v| lcm(acc, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_known_values() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_gcd_divides_both_and_product_identity() {
        for a in 1..60u64 {
            for b in 1..60u64 {
                let g = gcd(a, b);
                assert_eq!(a % g, 0);
                assert_eq!(b % g, 0);
                assert_eq!(g * lcm(a, b).unwrap(), a * b);
            }
        }
    }

    #[test]
    fn test_lcm_zero_and_overflow() {
        assert_eq!(lcm(0, 5), Some(0));
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn test_fold_helpers() {
        assert_eq!(gcd_all(&[12, 18, 24]), 6);
        assert_eq!(gcd_all(&[]), 0);
        assert_eq!(lcm_all(&[2, 3, 4]), Some(12));
        assert_eq!(lcm_all(&[]), Some(1));
    }
}
