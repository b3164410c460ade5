//! # Unit Types
//!
//! Type-safe wrappers for the mixed unit system used on site drawings.
//! They are plain `f64` wrappers so JSON stays clean (just numbers).
//!
//! ## Field Conventions
//!
//! Estimates mix units on purpose, following regional practice:
//! - Cross-section dimensions, slab/footing thickness and clear cover: inches
//! - Spans, heights and plan lengths: feet
//! - Bar diameters: millimeters
//! - Bar, tie and stirrup spacing: inches
//!
//! Keeping each convention in its own type stops an inch value from being
//! multiplied into a feet formula by accident.
//!
//! ## Lenient Input
//!
//! Part parameters come from form submissions, so every unit type accepts a
//! number, a numeric string, `null` or an empty string. Anything that does
//! not parse becomes zero.
//!
//! ## Example
//!
//! ```rust
//! use qto_core::units::{Feet, Inches};
//!
//! let depth = Inches(18.0);
//! let depth_ft: Feet = depth.into();
//! assert_eq!(depth_ft.0, 1.5);
//!
//! let parsed: Feet = serde_json::from_str("\"12.5\"").unwrap();
//! assert_eq!(parsed, Feet(12.5));
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Bar diameter in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / 25.4)
    }
}

impl From<Millimeters> for Feet {
    fn from(mm: Millimeters) -> Self {
        Feet(mm.0 / (25.4 * 12.0))
    }
}

impl Millimeters {
    /// Nearest whole millimeter, used to key steel by bar size
    pub fn whole_mm(self) -> u32 {
        if self.0.is_finite() && self.0 > 0.0 {
            self.0.round() as u32
        } else {
            0
        }
    }
}

// ============================================================================
// Area / Volume Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct CuFt(pub f64);

// ============================================================================
// Dimensionless
// ============================================================================

/// Percentage (e.g. 5.0 = 5%)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    /// Multiplier that inflates a quantity by this percentage
    pub fn factor(self) -> f64 {
        1.0 + self.0 / 100.0
    }
}

/// Whole-number count (members, bars, floors, openings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Count(pub u32);

impl Count {
    /// Count as a float factor
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = lenient_f64(deserializer)?;
        Ok(Count(if value > 0.0 { value.round() as u32 } else { 0 }))
    }
}

// ============================================================================
// Lenient Number Parsing
// ============================================================================

/// Deserialize a number the way form data arrives: numbers, numeric strings,
/// `null` and empty strings are all accepted. Unparseable values become 0.
pub fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

/// Coerce an arbitrary JSON value to a finite number, defaulting to 0.
pub fn number_from_value(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            /// True when the value can be used as a divisor or extent
            pub fn is_positive(self) -> bool {
                self.0 > 0.0
            }
        }

        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                lenient_f64(deserializer).map(Self)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SqFt);
impl_arithmetic!(CuFt);
impl_arithmetic!(Percent);
