//! # CC Casting
//!
//! Plain (lean) cement concrete or soling under footings and floors:
//! volume only, no reinforcement and no formwork.

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::materials::{add_concrete, MaterialQuantities, MixRatio};
use crate::units::{CuFt, Feet, Inches};

/// Input parameters for a lean concrete bed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CcCastingParams {
    /// Bed length (ft)
    pub length: Feet,

    /// Bed width (ft)
    pub width: Feet,

    /// Bed thickness (in)
    pub thickness: Inches,

    /// Concrete mix ratio (commonly "1:3:6")
    pub mix_ratio: MixRatio,
}

/// CC casting take-off.
pub fn calculate(params: &CcCastingParams, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let thickness: Feet = params.thickness.into();
    let wet = CuFt(params.length.0 * params.width.0 * thickness.0);
    add_concrete(&mut q, wet, &params.mix_ratio, constants);
    q
}
