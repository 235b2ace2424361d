//! # Financial Formulas
//!
//! VAT in both directions, simple interest and periodic compound interest.
//! All rates are percentages.

/// Add VAT to a net amount. Returns `(vat, gross)`.
///
/// ```text
/// vat   = net × rate / 100
/// gross = net + vat
/// ```
///
/// # Example
/// ```rust
/// use calc_core::formulas::finance::vat_add;
/// let (vat, gross) = vat_add(100.0, 20.0);
/// assert!((vat - 20.0).abs() < 1e-9);
/// assert!((gross - 120.0).abs() < 1e-9);
/// ```
#[inline]
pub fn vat_add(net: f64, rate_percent: f64) -> (f64, f64) {
    let vat = net * rate_percent / 100.0;
    (vat, net + vat)
}

/// Remove VAT from a gross amount. Returns `(net, vat)`.
///
/// ```text
/// net = gross / (1 + rate / 100)
/// vat = gross − net
/// ```
#[inline]
pub fn vat_remove(gross: f64, rate_percent: f64) -> (f64, f64) {
    let net = gross / (1.0 + rate_percent / 100.0);
    (net, gross - net)
}

/// Simple interest: I = P × r × t
#[inline]
pub fn simple_interest(principal: f64, annual_rate_percent: f64, years: f64) -> f64 {
    principal * annual_rate_percent / 100.0 * years
}

/// Compound interest future value: A = P (1 + r/n)^(n t)
///
/// # Example
/// ```rust
/// use calc_core::formulas::finance::compound_interest_total;
/// // $1000 at 5% compounded annually for 2 years
/// let a = compound_interest_total(1000.0, 5.0, 1, 2.0);
/// assert!((a - 1102.5).abs() < 1e-9);
/// ```
#[inline]
pub fn compound_interest_total(
    principal: f64,
    annual_rate_percent: f64,
    periods_per_year: u32,
    years: f64,
) -> f64 {
    let n = periods_per_year as f64;
    principal * (1.0 + annual_rate_percent / 100.0 / n).powf(n * years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vat_directions_are_inverse() {
        let (_, gross) = vat_add(250.0, 21.0);
        let (net, vat) = vat_remove(gross, 21.0);
        assert!((net - 250.0).abs() < 1e-9);
        assert!((vat - 52.5).abs() < 1e-9);
    }

    #[test]
    fn test_simple_interest() {
        assert!((simple_interest(1000.0, 5.0, 3.0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_compound_monthly_exceeds_simple() {
        let compound = compound_interest_total(1000.0, 6.0, 12, 10.0) - 1000.0;
        let simple = simple_interest(1000.0, 6.0, 10.0);
        assert!(compound > simple);
    }
}
