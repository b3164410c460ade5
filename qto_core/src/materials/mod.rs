//! # Materials
//!
//! Material keys, quantity mappings, mix ratios and the shared concrete /
//! mortar / reinforcement take-off used by every part calculator.
//!
//! ## Example
//!
//! ```rust
//! use qto_core::materials::{MaterialKey, MaterialQuantities};
//!
//! let mut totals = MaterialQuantities::new();
//! totals.add(MaterialKey::Steel(16), 12.0);
//! totals.add(MaterialKey::Steel(16), 8.0);
//!
//! let json = serde_json::to_string(&totals).unwrap();
//! assert_eq!(json, r#"{"Steel 16mm (kg)":20.0}"#);
//! ```

pub mod concrete;
pub mod mix;
pub mod quantities;

pub use concrete::{add_bars, add_concrete, add_mortar};
pub use mix::MixRatio;
pub use quantities::{MaterialKey, MaterialQuantities, Quantity, Rounding};
