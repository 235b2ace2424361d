//! # Plane and Solid Geometry
//!
//! ## Notation
//!
//! - `l`, `w` = rectangle length and width
//! - `a`, `b` = trapezoid parallel sides, `h` = height
//! - `r` = cylinder radius, `h` = cylinder height

use std::f64::consts::PI;

// =============================================================================
// RECTANGLE
// =============================================================================

/// Rectangle area: A = l × w
///
/// # Example
/// ```rust
/// use calc_core::formulas::geometry::rectangle_area;
/// assert_eq!(rectangle_area(4.0, 2.5), 10.0);
/// ```
#[inline]
pub fn rectangle_area(l: f64, w: f64) -> f64 {
    l * w
}

/// Rectangle perimeter: P = 2(l + w)
#[inline]
pub fn rectangle_perimeter(l: f64, w: f64) -> f64 {
    2.0 * (l + w)
}

/// Rectangle diagonal: d = √(l² + w²)
#[inline]
pub fn rectangle_diagonal(l: f64, w: f64) -> f64 {
    l.hypot(w)
}

// =============================================================================
// TRAPEZOID
// =============================================================================

/// Trapezoid area
///
/// ```text
///        a
///     ┌─────┐
///    /   h   \
///   /    │    \
///  └───────────┘
///        b
/// ```
///
/// # Formula
/// A = (a + b) / 2 × h
///
/// # Example
/// ```rust
/// use calc_core::formulas::geometry::trapezoid_area;
/// assert_eq!(trapezoid_area(3.0, 5.0, 4.0), 16.0);
/// ```
#[inline]
pub fn trapezoid_area(a: f64, b: f64, h: f64) -> f64 {
    (a + b) / 2.0 * h
}

/// Trapezoid median (midsegment): m = (a + b) / 2
#[inline]
pub fn trapezoid_median(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

// =============================================================================
// CYLINDER
// =============================================================================

/// Right circular cylinder volume: V = π r² h
///
/// # Example
/// ```rust
/// use calc_core::formulas::geometry::cylinder_volume;
/// let v = cylinder_volume(1.0, 2.0);
/// assert!((v - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn cylinder_volume(r: f64, h: f64) -> f64 {
    PI * r * r * h
}

/// Lateral surface area: A = 2π r h
#[inline]
pub fn cylinder_lateral_area(r: f64, h: f64) -> f64 {
    2.0 * PI * r * h
}

/// Total surface area including both ends: A = 2π r (r + h)
#[inline]
pub fn cylinder_total_area(r: f64, h: f64) -> f64 {
    2.0 * PI * r * (r + h)
}
