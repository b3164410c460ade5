//! # Beam Take-off
//!
//! Concrete, formwork, longitudinal bars and stirrups for a group of
//! identical rectangular beams.
//!
//! ## Assumptions
//!
//! - Floor beams are cast with the slab: the slab thickness is deducted from
//!   the beam depth for concrete and formwork so it is not counted twice
//! - Grade beams have no slab over them and use their full depth
//! - Formwork is three-sided (two sides plus soffit); the top is open or slab-cast
//! - Every bar group is anchored into the supports by a development length
//!   of (support width - cover) at each end
//! - Extra top bars at supports extend span/3 into the span at each end
//! - Stirrups: ceil(span / spacing) + 1, the extra stirrup closing the far end
//!
//! ## Example
//!
//! ```rust
//! use qto_core::calculations::beam::{calculate, BeamKind, BeamParams};
//! use qto_core::constants::EstimationConstants;
//! use qto_core::materials::MaterialKey;
//! use serde_json::json;
//!
//! let params: BeamParams = serde_json::from_value(json!({
//!     "width": 10, "depth": 18, "length": 20, "slabThickness": 6,
//!     "totalBeams": 1, "mixRatio": "1:2:4"
//! })).unwrap();
//!
//! let q = calculate(&params, BeamKind::Floor, &EstimationConstants::default());
//! // 10" × (18" - 6") × 20 ft
//! assert!((q.amount(&MaterialKey::ConcreteVolume) - 16.6667).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::equations::rebar::{bars_at_spacing, development_length, tie_cutting_length};
use crate::materials::{add_bars, add_concrete, MaterialKey, MaterialQuantities, MixRatio};
use crate::units::{Count, CuFt, Feet, Inches, Millimeters};

/// Floor beam or grade beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamKind {
    /// Beam supporting a slab cast monolithically with it
    Floor,
    /// Ground-level tie beam with no slab above
    Grade,
}

/// Input parameters for a beam group.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width": 10, "depth": 18, "length": 20, "slabThickness": 5,
///   "supportWidth": 12, "totalBeams": 4,
///   "topBarDia": 16, "topBarCount": 2,
///   "bottomBarDia": 20, "bottomBarCount": 3,
///   "extraTopDia": 16, "extraTopCount": 2,
///   "stirrupDia": 10, "stirrupSpacing": 6, "clearCover": 1.5,
///   "mixRatio": "1:1.5:3"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BeamParams {
    /// Beam width (in)
    pub width: Inches,

    /// Overall beam depth including any slab (in)
    pub depth: Inches,

    /// Clear span (ft)
    pub length: Feet,

    /// Thickness of the slab cast over the beam (in), ignored for grade beams
    pub slab_thickness: Inches,

    /// Width of the supporting column or wall (in)
    pub support_width: Inches,

    /// Number of identical beams
    pub total_beams: Count,

    /// Continuous top bar diameter (mm)
    pub top_bar_dia: Millimeters,

    /// Continuous top bars per beam
    pub top_bar_count: Count,

    /// Bottom bar diameter (mm)
    pub bottom_bar_dia: Millimeters,

    /// Bottom bars per beam
    pub bottom_bar_count: Count,

    /// Extra top bar diameter at supports (mm)
    pub extra_top_dia: Millimeters,

    /// Extra top bars at each support
    pub extra_top_count: Count,

    /// Stirrup diameter (mm)
    pub stirrup_dia: Millimeters,

    /// Stirrup spacing (in)
    pub stirrup_spacing: Inches,

    /// Clear cover (in)
    pub clear_cover: Inches,

    /// Concrete mix ratio
    pub mix_ratio: MixRatio,
}

impl BeamParams {
    /// Depth of concrete that belongs to the beam alone
    pub fn effective_depth(&self, kind: BeamKind) -> Inches {
        match kind {
            BeamKind::Floor => Inches((self.depth.0 - self.slab_thickness.0).max(0.0)),
            BeamKind::Grade => self.depth,
        }
    }
}

/// Beam take-off.
pub fn calculate(params: &BeamParams, kind: BeamKind, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let count = params.total_beams.as_f64();
    let span = params.length;
    let width: Feet = params.width.into();
    let effective_depth: Feet = params.effective_depth(kind).into();

    let wet = CuFt(width.0 * effective_depth.0 * span.0 * count);
    let formwork = (2.0 * effective_depth.0 + width.0) * span.0 * count;
    q.add(MaterialKey::Formwork, formwork);

    let anchorage = development_length(params.support_width, params.clear_cover);

    // Continuous bars are anchored at both ends
    let through_length = span + anchorage * 2.0;
    let top = through_length * params.top_bar_count.as_f64() * count;
    let bottom = through_length * params.bottom_bar_count.as_f64() * count;
    add_bars(&mut q, params.top_bar_dia, top, constants);
    add_bars(&mut q, params.bottom_bar_dia, bottom, constants);

    // Extra top bars: span/3 into the span from each support, anchored there
    let extra_piece = span / 3.0 + anchorage;
    let extra = extra_piece * 2.0 * params.extra_top_count.as_f64() * count;
    add_bars(&mut q, params.extra_top_dia, extra, constants);

    let per_beam = bars_at_spacing(span, params.stirrup_spacing);
    if per_beam > 0 && count > 0.0 {
        let stirrups = f64::from(per_beam) * count;
        let cutting = tie_cutting_length(
            params.width,
            params.depth,
            params.clear_cover,
            params.stirrup_dia,
            constants.hook_bar_diameters,
        );
        q.add(MaterialKey::Stirrups, stirrups);
        add_bars(&mut q, params.stirrup_dia, cutting * stirrups, constants);
    }

    add_concrete(&mut q, wet, &params.mix_ratio, constants);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::rebar::bar_unit_weight;
    use serde_json::json;

    fn test_beam() -> BeamParams {
        serde_json::from_value(json!({
            "width": 12, "depth": 18, "length": 18, "slabThickness": 6,
            "supportWidth": 13.5, "totalBeams": 2,
            "topBarDia": 16, "topBarCount": 2,
            "bottomBarDia": 20, "bottomBarCount": 3,
            "extraTopDia": 16, "extraTopCount": 2,
            "stirrupDia": 10, "stirrupSpacing": 6, "clearCover": 1.5,
            "mixRatio": "1:2:4"
        }))
        .unwrap()
    }

    fn w(d: f64) -> f64 {
        bar_unit_weight(Millimeters(d), 533.0)
    }

    #[test]
    fn test_floor_beam_deducts_slab() {
        let q = calculate(&test_beam(), BeamKind::Floor, &EstimationConstants::default());
        // 1 ft × 1 ft × 18 ft × 2 beams
        assert!((q.amount(&MaterialKey::ConcreteVolume) - 36.0).abs() < 1e-9);
        // (2 × 1 + 1) × 18 × 2
        assert!((q.amount(&MaterialKey::Formwork) - 108.0).abs() < 1e-9);
    }

    #[test]
    fn test_grade_beam_uses_full_depth() {
        let q = calculate(&test_beam(), BeamKind::Grade, &EstimationConstants::default());
        assert!((q.amount(&MaterialKey::ConcreteVolume) - 54.0).abs() < 1e-9);
        assert!((q.amount(&MaterialKey::Formwork) - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_longitudinal_bars() {
        let q = calculate(&test_beam(), BeamKind::Floor, &EstimationConstants::default());
        // anchorage (13.5 - 1.5) / 12 = 1 ft per end -> 20 ft per bar
        let top = 20.0 * 2.0 * 2.0;
        let extra = (6.0 + 1.0) * 2.0 * 2.0 * 2.0;
        assert!((q.amount(&MaterialKey::Steel(16)) - (top + extra) * w(16.0)).abs() < 1e-9);
        let bottom = 20.0 * 3.0 * 2.0;
        assert!((q.amount(&MaterialKey::Steel(20)) - bottom * w(20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_stirrups_include_end_stirrup() {
        let q = calculate(&test_beam(), BeamKind::Floor, &EstimationConstants::default());
        // 216" / 6" = 36 spaces + 1, for 2 beams
        assert_eq!(q.amount(&MaterialKey::Stirrups), 74.0);
        // core 9" × 15" -> 48" = 4 ft, plus hooks
        let cutting = 4.0 + 200.0 / 304.8;
        assert!((q.amount(&MaterialKey::Steel(10)) - 74.0 * cutting * w(10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_stirrup_count_saturates_on_huge_span() {
        let mut beam = test_beam();
        beam.length = Feet(4.0e8);
        beam.stirrup_spacing = Inches(1.0);
        let q = calculate(&beam, BeamKind::Floor, &EstimationConstants::default());
        assert_eq!(q.amount(&MaterialKey::Stirrups), f64::from(u32::MAX) * 2.0);
    }

    #[test]
    fn test_missing_extra_top_is_skipped() {
        let mut beam = test_beam();
        beam.extra_top_count = Count(0);
        beam.extra_top_dia = Millimeters(0.0);
        let q = calculate(&beam, BeamKind::Floor, &EstimationConstants::default());
        let top = 20.0 * 2.0 * 2.0;
        assert!((q.amount(&MaterialKey::Steel(16)) - top * w(16.0)).abs() < 1e-9);
    }

    #[test]
    fn test_slab_thicker_than_beam() {
        let mut beam = test_beam();
        beam.slab_thickness = Inches(24.0);
        assert_eq!(beam.effective_depth(BeamKind::Floor), Inches(0.0));
        let q = calculate(&beam, BeamKind::Floor, &EstimationConstants::default());
        assert_eq!(q.amount(&MaterialKey::ConcreteVolume), 0.0);
    }
}
