//! # Slab Take-off
//!
//! Two-way reinforced floor or roof slab.
//!
//! - Formwork is the soffit only (length × width)
//! - Main bars run along the short span, laid at `mainBarSpacing` across the long span
//! - Distribution bars run along the long span, laid across the short span
//! - Bar count per direction includes the edge bar: ceil(extent / spacing) + 1

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::equations::rebar::bars_at_spacing;
use crate::materials::{add_bars, add_concrete, MaterialKey, MaterialQuantities, MixRatio};
use crate::units::{CuFt, Feet, Inches, Millimeters};

/// Input parameters for a slab panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlabParams {
    /// Panel length (ft)
    pub length: Feet,

    /// Panel width (ft)
    pub width: Feet,

    /// Slab thickness (in)
    pub thickness: Inches,

    /// Main bar diameter (mm)
    pub main_bar_dia: Millimeters,

    /// Main bar spacing (in)
    pub main_bar_spacing: Inches,

    /// Distribution bar diameter (mm)
    pub dist_bar_dia: Millimeters,

    /// Distribution bar spacing (in)
    pub dist_bar_spacing: Inches,

    /// Concrete mix ratio
    pub mix_ratio: MixRatio,
}

impl SlabParams {
    /// (short span, long span)
    pub fn spans(&self) -> (Feet, Feet) {
        if self.length.0 <= self.width.0 {
            (self.length, self.width)
        } else {
            (self.width, self.length)
        }
    }
}

/// Slab take-off.
pub fn calculate(params: &SlabParams, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let thickness: Feet = params.thickness.into();
    let (short, long) = params.spans();

    let wet = CuFt(params.length.0 * params.width.0 * thickness.0);
    q.add(MaterialKey::Formwork, params.length.0 * params.width.0);

    let main_bars = bars_at_spacing(long, params.main_bar_spacing);
    add_bars(&mut q, params.main_bar_dia, short * f64::from(main_bars), constants);

    let dist_bars = bars_at_spacing(short, params.dist_bar_spacing);
    add_bars(&mut q, params.dist_bar_dia, long * f64::from(dist_bars), constants);

    add_concrete(&mut q, wet, &params.mix_ratio, constants);
    q
}
