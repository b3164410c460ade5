//! # Pile Take-off
//!
//! Bored cast-in-situ circular piles. Unlike the rectangular members, the
//! cross-section is a circle and the transverse steel is a continuous
//! helical spiral, not a set of discrete ties.
//!
//! - Volume = π (D/2)² × length × count (D converted to feet)
//! - Main bars: (pile length + lap) × bars per pile
//! - Spiral: confined circumference × (length / pitch) turns
//! - No formwork (concrete is cast against the bore)
//!
//! ## Example
//!
//! ```rust
//! use qto_core::calculations::pile::{calculate, PileParams};
//! use qto_core::constants::EstimationConstants;
//! use qto_core::materials::MaterialKey;
//! use serde_json::json;
//!
//! let params: PileParams = serde_json::from_value(json!({
//!     "diameter": 20, "length": 60, "count": 1, "mixRatio": "1:1.5:3"
//! })).unwrap();
//! let q = calculate(&params, &EstimationConstants::default());
//! assert!((q.amount(&MaterialKey::ConcreteVolume) - 130.9).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::equations::geometry::circle_area;
use crate::equations::rebar::spiral_length;
use crate::materials::{add_bars, add_concrete, MaterialKey, MaterialQuantities, MixRatio};
use crate::units::{Count, CuFt, Feet, Inches, Millimeters};

/// Input parameters for a pile group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PileParams {
    /// Pile diameter (in)
    pub diameter: Inches,

    /// Pile length (ft)
    pub length: Feet,

    /// Number of identical piles
    pub count: Count,

    /// Main bar diameter (mm)
    pub main_bar_dia: Millimeters,

    /// Main bars per pile
    pub main_bar_count: Count,

    /// Lap length added to each main bar (ft)
    pub lapping_length: Feet,

    /// Spiral bar diameter (mm)
    pub spiral_dia: Millimeters,

    /// Spiral pitch (in)
    pub spiral_pitch: Inches,

    /// Clear cover to the spiral (in)
    pub clear_cover: Inches,

    /// Concrete mix ratio
    pub mix_ratio: MixRatio,
}

/// Pile take-off.
pub fn calculate(params: &PileParams, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let count = params.count.as_f64();
    let diameter: Feet = params.diameter.into();

    let wet = CuFt(circle_area(diameter.0) * params.length.0 * count);

    let main = (params.length + params.lapping_length) * params.main_bar_count.as_f64() * count;
    add_bars(&mut q, params.main_bar_dia, main, constants);

    let spiral = spiral_length(
        params.diameter,
        params.clear_cover,
        params.spiral_dia,
        params.length,
        params.spiral_pitch,
    ) * count;
    add_bars(&mut q, params.spiral_dia, spiral, constants);

    add_concrete(&mut q, wet, &params.mix_ratio, constants);
    q
}
