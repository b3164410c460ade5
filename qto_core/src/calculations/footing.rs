//! # Footing Family Take-off
//!
//! Standalone footings, combined footings, mat foundations and pile caps are
//! all rectangular pads with a two-way bar mesh. They differ only in the
//! number of mesh layers:
//!
//! | Kind             | Mesh layers        |
//! |------------------|--------------------|
//! | Standalone       | 1 (bottom)         |
//! | Combined footing | 2 (top + bottom)   |
//! | Mat foundation   | 2 (top + bottom)   |
//! | Pile cap         | 2 (top + bottom)   |
//!
//! Formwork covers the full perimeter over the pad thickness.

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::equations::geometry::rectangle_perimeter;
use crate::equations::rebar::bars_at_spacing;
use crate::materials::{add_bars, add_concrete, MaterialKey, MaterialQuantities, MixRatio};
use crate::units::{Count, CuFt, Feet, Inches, Millimeters};

/// Which member of the footing family is being estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootingKind {
    Standalone,
    Combined,
    Mat,
    PileCap,
}

impl FootingKind {
    /// Number of two-way mesh layers
    pub fn mesh_layers(&self) -> u32 {
        match self {
            FootingKind::Standalone => 1,
            FootingKind::Combined | FootingKind::Mat | FootingKind::PileCap => 2,
        }
    }
}

/// Input parameters for a footing group.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 6, "width": 5, "thickness": 18, "count": 4,
///   "barDia": 12, "barSpacing": 6, "mixRatio": "1:2:4"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FootingParams {
    /// Pad length (ft)
    pub length: Feet,

    /// Pad width (ft)
    pub width: Feet,

    /// Pad thickness (in)
    pub thickness: Inches,

    /// Number of identical pads
    pub count: Count,

    /// Mesh bar diameter (mm)
    pub bar_dia: Millimeters,

    /// Mesh bar spacing, both directions (in)
    pub bar_spacing: Inches,

    /// Concrete mix ratio
    pub mix_ratio: MixRatio,
}

/// Footing take-off for the given kind.
pub fn calculate(params: &FootingParams, kind: FootingKind, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let count = params.count.as_f64();
    let thickness: Feet = params.thickness.into();

    let wet = CuFt(params.length.0 * params.width.0 * thickness.0 * count);
    let formwork = rectangle_perimeter(params.length.0, params.width.0) * thickness.0 * count;
    q.add(MaterialKey::Formwork, formwork);

    // Bars along the length are laid across the width, and vice versa
    let along_length = bars_at_spacing(params.width, params.bar_spacing);
    let along_width = bars_at_spacing(params.length, params.bar_spacing);
    let mesh = params.length * f64::from(along_length) + params.width * f64::from(along_width);
    let total = mesh * f64::from(kind.mesh_layers()) * count;
    add_bars(&mut q, params.bar_dia, total, constants);

    add_concrete(&mut q, wet, &params.mix_ratio, constants);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::rebar::bar_unit_weight;
    use serde_json::json;

    fn test_footing() -> FootingParams {
        serde_json::from_value(json!({
            "length": 6, "width": 5, "thickness": 18, "count": 4,
            "barDia": 12, "barSpacing": 6, "mixRatio": "1:2:4"
        }))
        .unwrap()
    }

    fn mesh_kg() -> f64 {
        // along length: 60"/6"+1 = 11 bars × 6 ft; along width: 72"/6"+1 = 13 bars × 5 ft
        (11.0 * 6.0 + 13.0 * 5.0) * bar_unit_weight(Millimeters(12.0), 533.0)
    }

    #[test]
    fn test_standalone_volume_and_formwork() {
        let q = calculate(&test_footing(), FootingKind::Standalone, &EstimationConstants::default());
        assert!((q.amount(&MaterialKey::ConcreteVolume) - 180.0).abs() < 1e-9);
        // 22 ft perimeter × 1.5 ft × 4
        assert!((q.amount(&MaterialKey::Formwork) - 132.0).abs() < 1e-9);
    }

    #[test]
    fn test_standalone_single_layer() {
        let q = calculate(&test_footing(), FootingKind::Standalone, &EstimationConstants::default());
        assert!((q.amount(&MaterialKey::Steel(12)) - mesh_kg() * 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_double_layer_kinds() {
        for kind in [FootingKind::Combined, FootingKind::Mat, FootingKind::PileCap] {
            let q = calculate(&test_footing(), kind, &EstimationConstants::default());
            assert!((q.amount(&MaterialKey::Steel(12)) - mesh_kg() * 8.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_spacing_no_steel() {
        let mut f = test_footing();
        f.bar_spacing = Inches(0.0);
        let q = calculate(&f, FootingKind::Mat, &EstimationConstants::default());
        assert_eq!(q.steel().count(), 0);
        assert!(q.amount(&MaterialKey::ConcreteVolume) > 0.0);
    }
}
