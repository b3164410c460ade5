//! # Geometry Primitives
//!
//! Plane geometry used for volumes and formwork areas. All functions are
//! unit-agnostic; the caller converts to consistent units first.

use std::f64::consts::PI;

/// Area of a rectangle, A = a × b
#[inline]
pub fn rectangle_area(a: f64, b: f64) -> f64 {
    a * b
}

/// Perimeter of a rectangle, P = 2(a + b)
///
/// ```rust
/// use qto_core::equations::geometry::rectangle_perimeter;
///
/// assert_eq!(rectangle_perimeter(1.0, 1.5), 5.0);
/// ```
#[inline]
pub fn rectangle_perimeter(a: f64, b: f64) -> f64 {
    2.0 * (a + b)
}

/// Area of a circle from its diameter, A = π d² / 4
#[inline]
pub fn circle_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Circumference of a circle from its diameter, C = π d
#[inline]
pub fn circumference(diameter: f64) -> f64 {
    PI * diameter
}

/// Length of the hypotenuse, √(a² + b²)
#[inline]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Round up to a whole number, ignoring floating point noise.
///
/// `120.0 / 6.0` can land a hair above 20 after unit conversions; a plain
/// `ceil` would then report 21. Values are snapped to 1e-6 first.
///
/// ```rust
/// use qto_core::equations::geometry::ceil_whole;
///
/// assert_eq!(ceil_whole(20.000000001), 20.0);
/// assert_eq!(ceil_whole(1.76), 2.0);
/// ```
#[inline]
pub fn ceil_whole(value: f64) -> f64 {
    ((value * 1e6).round() / 1e6).ceil()
}
