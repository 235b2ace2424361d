//! # Fractions
//!
//! Exact rational values with `i64` numerator and denominator.
//!
//! Comparison and arithmetic widen to `i128` internally so that
//! cross-multiplication never loses precision, which matters for fractions
//! whose decimal values agree to every bit of an `f64`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::arithmetic::Fraction;
//! use std::cmp::Ordering;
//!
//! let a = Fraction::new(8, 12).unwrap().simplified().unwrap();
//! assert_eq!((a.numerator, a.denominator), (2, 3));
//!
//! let b = Fraction::new(3, 4).unwrap();
//! assert_eq!(a.compare(&b), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::integer::{gcd, lcm};
use crate::errors::{CalcError, CalcResult};

/// A fraction `numerator / denominator` with a non-zero denominator.
///
/// Neither part may be `i64::MIN`, whose magnitude has no positive `i64`
/// counterpart; [`Fraction::new`] and [`Fraction::check`] enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

/// Arithmetic operation between two fractions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FractionOp {
    /// Operator symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            FractionOp::Add => "+",
            FractionOp::Subtract => "−",
            FractionOp::Multiply => "×",
            FractionOp::Divide => "÷",
        }
    }

    /// Parse from a word or symbol ("add", "+", "times", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Some(FractionOp::Add),
            "subtract" | "sub" | "minus" | "-" => Some(FractionOp::Subtract),
            "multiply" | "mul" | "times" | "*" | "x" => Some(FractionOp::Multiply),
            "divide" | "div" | "/" => Some(FractionOp::Divide),
            _ => None,
        }
    }
}

impl Fraction {
    /// Create a fraction, rejecting a zero denominator and `i64::MIN` parts.
    pub fn new(numerator: i64, denominator: i64) -> CalcResult<Self> {
        let fraction = Fraction {
            numerator,
            denominator,
        };
        if numerator == i64::MIN {
            return Err(CalcError::invalid_input(
                "numerator",
                numerator.to_string(),
                PART_RANGE,
            ));
        }
        fraction.check("denominator")?;
        Ok(fraction)
    }

    /// Reject a zero denominator or an out-of-range part, reporting `field`.
    pub fn check(&self, field: &str) -> CalcResult<()> {
        if self.denominator == 0 {
            return Err(CalcError::invalid_input(
                field,
                self.to_string(),
                "Denominator cannot be zero",
            ));
        }
        if self.numerator == i64::MIN || self.denominator == i64::MIN {
            return Err(CalcError::invalid_input(field, self.to_string(), PART_RANGE));
        }
        Ok(())
    }

    /// Parse `"a/b"`, `"-a/b"` or a bare integer `"a"` (denominator 1).
    ///
    /// `field` names the input for error reporting.
    pub fn parse(field: &str, s: &str) -> CalcResult<Self> {
        let s = s.trim();
        let parse_part = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| CalcError::not_numeric(field, s, "fraction (a/b)"))
        };
        let fraction = match s.split_once('/') {
            Some((num, den)) => Fraction::new(parse_part(num)?, parse_part(den)?),
            None => Fraction::new(parse_part(s)?, 1),
        };
        fraction.map_err(|e| match e {
            CalcError::InvalidInput { reason, .. } => CalcError::invalid_input(field, s, reason),
            other => other,
        })
    }

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// Idempotent: simplifying a simplified fraction returns it unchanged.
    /// Fails only for parts outside the range [`Fraction::check`] accepts,
    /// e.g. `i64::MIN / -1`.
    pub fn simplified(&self) -> CalcResult<Fraction> {
        if self.denominator == 0 {
            return Err(CalcError::invalid_input(
                "denominator",
                self.to_string(),
                "Denominator cannot be zero",
            ));
        }
        reduce_wide(self.numerator as i128, self.denominator as i128)
    }

    /// Whether the fraction is already in lowest terms with a positive denominator
    pub fn is_simplified(&self) -> bool {
        self.denominator > 0
            && gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs()) == 1
    }

    /// Exact comparison by cross-multiplication.
    pub fn compare(&self, other: &Fraction) -> Ordering {
        // Normalise signs so that both denominators are positive.
        let (a, b) = signed_parts(self);
        let (c, d) = signed_parts(other);
        (a * d).cmp(&(c * b))
    }

    /// Decimal value (lossy)
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Rewrite this fraction over `denominator`, which must be a multiple of
    /// the simplified denominator.
    pub fn with_denominator(&self, denominator: i64) -> Option<Fraction> {
        let s = self.simplified().ok()?;
        if denominator == 0 || denominator % s.denominator != 0 {
            return None;
        }
        let factor = denominator / s.denominator;
        let numerator = s.numerator.checked_mul(factor)?;
        Some(Fraction {
            numerator,
            denominator,
        })
    }

    /// Whole part and proper remainder, e.g. 7/3 -> (2, 1/3); -7/3 -> (-2, 1/3).
    pub fn mixed(&self) -> CalcResult<(i64, Fraction)> {
        // Simplified denominators are positive, so the division cannot overflow
        let s = self.simplified()?;
        let whole = s.numerator / s.denominator;
        let remainder = (s.numerator % s.denominator).abs();
        Ok((
            whole,
            Fraction {
                numerator: remainder,
                denominator: s.denominator,
            },
        ))
    }

    /// Apply an arithmetic operation, returning a simplified result.
    pub fn apply(&self, op: FractionOp, other: &Fraction) -> CalcResult<Fraction> {
        let (a, b) = signed_parts(self);
        let (c, d) = signed_parts(other);
        let mul = |x: i128, y: i128| x.checked_mul(y).ok_or_else(too_wide);
        let (num, den) = match op {
            FractionOp::Add => (
                mul(a, d)?.checked_add(mul(c, b)?).ok_or_else(too_wide)?,
                mul(b, d)?,
            ),
            FractionOp::Subtract => (
                mul(a, d)?.checked_sub(mul(c, b)?).ok_or_else(too_wide)?,
                mul(b, d)?,
            ),
            FractionOp::Multiply => (mul(a, c)?, mul(b, d)?),
            FractionOp::Divide => {
                if c == 0 {
                    return Err(CalcError::invalid_input(
                        "second",
                        other.to_string(),
                        "Cannot divide by a zero fraction",
                    ));
                }
                (mul(a, d)?, mul(b, c)?)
            }
        };
        reduce_wide(num, den)
    }
}

/// Least common denominator of a set of fractions (1 for an empty set).
pub fn common_denominator(fractions: &[Fraction]) -> Option<i64> {
    let mut acc: u64 = 1;
    for f in fractions {
        acc = lcm(acc, f.simplified().ok()?.denominator.unsigned_abs())?;
    }
    i64::try_from(acc).ok()
}

/// Numerator and denominator widened, with the sign moved to the numerator.
fn signed_parts(f: &Fraction) -> (i128, i128) {
    if f.denominator < 0 {
        (-(f.numerator as i128), -(f.denominator as i128))
    } else {
        (f.numerator as i128, f.denominator as i128)
    }
}

const PART_RANGE: &str = "Numerator and denominator must lie within ±9223372036854775807";

fn too_wide() -> CalcError {
    CalcError::calculation_failed(
        "Fraction",
        "Result does not fit in a 64-bit numerator/denominator",
    )
}

/// Divide out the gcd and move the sign to the numerator, then narrow.
fn reduce_wide(num: i128, den: i128) -> CalcResult<Fraction> {
    // Magnitudes above i128::MAX cannot narrow to i64 anyway
    let g = i128::try_from(gcd_wide(num.unsigned_abs(), den.unsigned_abs())).map_err(|_| too_wide())?;
    let (num, den) = (num / g, den / g);
    let (num, den) = if den < 0 {
        (
            num.checked_neg().ok_or_else(too_wide)?,
            den.checked_neg().ok_or_else(too_wide)?,
        )
    } else {
        (num, den)
    };
    match (i64::try_from(num), i64::try_from(den)) {
        (Ok(numerator), Ok(denominator)) => Ok(Fraction {
            numerator,
            denominator,
        }),
        _ => Err(too_wide()),
    }
}

fn gcd_wide(a: u128, b: u128) -> u128 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.max(1)
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let err = Fraction::new(1, 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_simplify() {
        assert_eq!(frac(8, 12).simplified().unwrap(), frac(2, 3));
        assert_eq!(frac(3, -6).simplified().unwrap(), frac(-1, 2));
        assert_eq!(frac(-4, -8).simplified().unwrap(), frac(1, 2));
        assert_eq!(frac(0, 5).simplified().unwrap(), frac(0, 1));
    }

    #[test]
    fn test_simplify_idempotent() {
        for n in -30..30i64 {
            for d in (-12..12i64).filter(|d| *d != 0) {
                let once = frac(n, d).simplified().unwrap();
                assert!(once.is_simplified());
                assert_eq!(once.simplified().unwrap(), once);
            }
        }
    }

    #[test]
    fn test_compare_exact() {
        assert_eq!(frac(1, 2).compare(&frac(2, 4)), Ordering::Equal);
        assert_eq!(frac(1, 3).compare(&frac(1, 2)), Ordering::Less);
        assert_eq!(frac(-1, 2).compare(&frac(1, -3)), Ordering::Less);

        // Indistinguishable as f64, distinct as rationals
        let a = frac(9_007_199_254_740_993, 9_007_199_254_740_992);
        let b = frac(1, 1);
        assert_eq!(a.to_f64(), b.to_f64());
        assert_eq!(a.compare(&b), Ordering::Greater);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(frac(1, 2).apply(FractionOp::Add, &frac(1, 3)).unwrap(), frac(5, 6));
        assert_eq!(frac(1, 2).apply(FractionOp::Subtract, &frac(3, 4)).unwrap(), frac(-1, 4));
        assert_eq!(frac(2, 3).apply(FractionOp::Multiply, &frac(9, 4)).unwrap(), frac(3, 2));
        assert_eq!(frac(1, 2).apply(FractionOp::Divide, &frac(-1, 4)).unwrap(), frac(-2, 1));
        assert!(frac(1, 2).apply(FractionOp::Divide, &frac(0, 4)).is_err());
    }

    #[test]
    fn test_mixed_and_common_denominator() {
        assert_eq!(frac(7, 3).mixed().unwrap(), (2, frac(1, 3)));
        assert_eq!(frac(-7, 3).mixed().unwrap(), (-2, frac(1, 3)));
        assert_eq!(common_denominator(&[frac(1, 4), frac(1, 6)]), Some(12));
        assert_eq!(frac(1, 4).with_denominator(12), Some(frac(3, 12)));
        assert_eq!(frac(1, 4).with_denominator(10), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Fraction::parse("a", " 3/4 ").unwrap(), frac(3, 4));
        assert_eq!(Fraction::parse("a", "-5").unwrap(), frac(-5, 1));
        assert_eq!(Fraction::parse("a", "x/4").unwrap_err().error_code(), "NOT_NUMERIC");
        assert_eq!(Fraction::parse("a", "1/0").unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_min_parts_rejected() {
        let err = Fraction::new(i64::MIN, -1).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("numerator"));

        let err = Fraction::new(1, i64::MIN).unwrap_err();
        assert_eq!(err.field(), Some("denominator"));

        let err = Fraction::parse("first", "-9223372036854775808/-1").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("first"));

        let literal = Fraction { numerator: 1, denominator: i64::MIN };
        assert_eq!(literal.check("x").unwrap_err().field(), Some("x"));
    }

    #[test]
    fn test_unrepresentable_simplify_is_an_error() {
        // Built directly, bypassing `new`
        let negated_min = Fraction { numerator: i64::MIN, denominator: -1 };
        assert_eq!(negated_min.simplified().unwrap_err().error_code(), "CALCULATION_FAILED");
        assert!(negated_min.mixed().is_err());

        let min_denominator = Fraction { numerator: 1, denominator: i64::MIN };
        assert!(min_denominator.simplified().is_err());

        // Still representable once the common factor is removed
        let even = Fraction { numerator: 2, denominator: i64::MIN };
        assert_eq!(even.simplified().unwrap(), frac(-1, 4_611_686_018_427_387_904));

        let extreme = frac(i64::MAX, -1);
        assert_eq!(extreme.simplified().unwrap(), frac(-i64::MAX, 1));
        assert_eq!(extreme.mixed().unwrap(), (-i64::MAX, frac(0, 1)));
    }

    #[test]
    fn test_arithmetic_overflow_is_an_error() {
        // 2^126 + 2^126 does not fit in i128
        let min = Fraction { numerator: i64::MIN, denominator: i64::MIN };
        let err = min.apply(FractionOp::Add, &min).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert_eq!(min.apply(FractionOp::Subtract, &min).unwrap(), frac(0, 1));
        assert_eq!(min.apply(FractionOp::Multiply, &min).unwrap(), frac(1, 1));
        assert_eq!(min.apply(FractionOp::Divide, &min).unwrap(), frac(1, 1));

        let big = frac(i64::MAX, 1);
        let err = big.apply(FractionOp::Multiply, &big).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert_eq!(
            frac(i64::MAX, 2).apply(FractionOp::Add, &frac(i64::MAX, 2)).unwrap(),
            frac(i64::MAX, 1)
        );
    }
}
