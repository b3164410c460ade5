//! # Retaining Wall Take-off
//!
//! Cantilever retaining wall: a tapered stem on a rectangular base slab.
//!
//! - Stem volume uses the average of top and bottom stem thickness
//! - Formwork covers both faces of the stem; base slab edges are not formed
//! - Three independent bar groups:
//!   - vertical stem bars, spaced along the wall length, each the full height
//!   - horizontal stem bars, spaced up the height, each the full length
//!   - base slab bars, spaced along the wall length, each the base width

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::equations::rebar::bars_at_spacing;
use crate::materials::{add_bars, add_concrete, MaterialKey, MaterialQuantities, MixRatio};
use crate::units::{CuFt, Feet, Inches, Millimeters};

/// Input parameters for a retaining wall run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetainingWallParams {
    /// Wall length (ft)
    pub length: Feet,

    /// Stem height above the base (ft)
    pub height: Feet,

    /// Stem thickness at the top (in)
    pub stem_top_thickness: Inches,

    /// Stem thickness at the base (in)
    pub stem_bottom_thickness: Inches,

    /// Base slab width (ft)
    pub base_width: Feet,

    /// Base slab thickness (in)
    pub base_thickness: Inches,

    /// Vertical stem bar diameter (mm)
    pub vertical_bar_dia: Millimeters,

    /// Vertical stem bar spacing (in)
    pub vertical_bar_spacing: Inches,

    /// Horizontal stem bar diameter (mm)
    pub horizontal_bar_dia: Millimeters,

    /// Horizontal stem bar spacing (in)
    pub horizontal_bar_spacing: Inches,

    /// Base slab bar diameter (mm)
    pub base_bar_dia: Millimeters,

    /// Base slab bar spacing (in)
    pub base_bar_spacing: Inches,

    /// Concrete mix ratio
    pub mix_ratio: MixRatio,
}

/// Retaining wall take-off.
pub fn calculate(params: &RetainingWallParams, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let avg_stem: Feet = ((params.stem_top_thickness + params.stem_bottom_thickness) / 2.0).into();
    let base_thickness: Feet = params.base_thickness.into();

    let stem = avg_stem.0 * params.length.0 * params.height.0;
    let base = params.base_width.0 * params.length.0 * base_thickness.0;
    let wet = CuFt(stem + base);

    q.add(MaterialKey::Formwork, 2.0 * params.length.0 * params.height.0);

    let vertical = bars_at_spacing(params.length, params.vertical_bar_spacing);
    add_bars(&mut q, params.vertical_bar_dia, params.height * f64::from(vertical), constants);

    let horizontal = bars_at_spacing(params.height, params.horizontal_bar_spacing);
    add_bars(&mut q, params.horizontal_bar_dia, params.length * f64::from(horizontal), constants);

    let base_bars = bars_at_spacing(params.length, params.base_bar_spacing);
    add_bars(&mut q, params.base_bar_dia, params.base_width * f64::from(base_bars), constants);

    add_concrete(&mut q, wet, &params.mix_ratio, constants);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::rebar::bar_unit_weight;
    use serde_json::json;

    fn test_wall() -> RetainingWallParams {
        serde_json::from_value(json!({
            "length": 20, "height": 8,
            "stemTopThickness": 8, "stemBottomThickness": 16,
            "baseWidth": 6, "baseThickness": 12,
            "verticalBarDia": 12, "verticalBarSpacing": 6,
            "horizontalBarDia": 10, "horizontalBarSpacing": 8,
            "baseBarDia": 12, "baseBarSpacing": 8,
            "mixRatio": "1:2:4"
        }))
        .unwrap()
    }

    #[test]
    fn test_volume_stem_plus_base() {
        let q = calculate(&test_wall(), &EstimationConstants::default());
        // stem 1 ft avg × 20 × 8 = 160; base 6 × 20 × 1 = 120
        assert!((q.amount(&MaterialKey::ConcreteVolume) - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_formwork_both_stem_faces() {
        let q = calculate(&test_wall(), &EstimationConstants::default());
        assert!((q.amount(&MaterialKey::Formwork) - 320.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_bar_groups() {
        let q = calculate(&test_wall(), &EstimationConstants::default());
        // vertical: 240"/6"+1 = 41 × 8 ft; base: 240"/8"+1 = 31 × 6 ft
        let d12 = (41.0 * 8.0 + 31.0 * 6.0) * bar_unit_weight(Millimeters(12.0), 533.0);
        assert!((q.amount(&MaterialKey::Steel(12)) - d12).abs() < 1e-9);
        // horizontal: 96"/8"+1 = 13 × 20 ft
        let d10 = 13.0 * 20.0 * bar_unit_weight(Millimeters(10.0), 533.0);
        assert!((q.amount(&MaterialKey::Steel(10)) - d10).abs() < 1e-9);
    }

    #[test]
    fn test_missing_ratio_keeps_steel_and_formwork() {
        let mut wall = test_wall();
        wall.mix_ratio = MixRatio::none();
        let q = calculate(&wall, &EstimationConstants::default());
        assert!(q.get(&MaterialKey::Cement).is_none());
        assert!(q.get(&MaterialKey::ConcreteVolume).is_none());
        assert!(q.amount(&MaterialKey::Formwork) > 0.0);
        assert_eq!(q.steel().count(), 2);
    }
}
