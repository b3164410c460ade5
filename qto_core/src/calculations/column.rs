//! # Column Take-off
//!
//! Concrete, formwork, main bars and ties for a group of identical
//! rectangular columns.
//!
//! ## Conventions
//!
//! - Cross-section (`width`, `depth`) and cover in inches; `height` per floor in feet
//! - Main bars run the full height of all floors, with one lap per floor joint
//! - Tie count = ceil(total height in inches / spacing) per column
//! - Short columns (stub/plinth columns) are a single lift: floors fixed at 1, no lap
//!
//! ## Example
//!
//! ```rust
//! use qto_core::calculations::column::{calculate, ColumnParams};
//! use qto_core::constants::EstimationConstants;
//! use qto_core::materials::MaterialKey;
//! use serde_json::json;
//!
//! let params: ColumnParams = serde_json::from_value(json!({
//!     "width": 12, "depth": 12, "height": 10, "floors": 1, "totalColumns": 1,
//!     "mixRatio": "1:2:4"
//! })).unwrap();
//!
//! let q = calculate(&params, &EstimationConstants::default());
//! assert!((q.amount(&MaterialKey::ConcreteVolume) - 10.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::equations::geometry::{rectangle_area, rectangle_perimeter};
use crate::equations::rebar::{spaced_count, tie_cutting_length};
use crate::materials::{add_bars, add_concrete, MaterialKey, MaterialQuantities, MixRatio};
use crate::units::{Count, CuFt, Feet, Inches, Millimeters};

/// Input parameters for a column group.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width": 12, "depth": 15, "height": 10, "floors": 3,
///   "totalColumns": 8, "lappingLength": 2.5,
///   "mainBarDia": 16, "mainBarCount": 6,
///   "tieBarDia": 10, "tieSpacing": 6, "clearCover": 1.5,
///   "mixRatio": "1:1.5:3"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnParams {
    /// Section width (in)
    pub width: Inches,

    /// Section depth (in)
    pub depth: Inches,

    /// Height per floor (ft)
    pub height: Feet,

    /// Number of floors the column runs through (minimum 1)
    pub floors: Count,

    /// Number of identical columns
    pub total_columns: Count,

    /// Lap length added at each floor joint (ft)
    pub lapping_length: Feet,

    /// Main bar diameter (mm)
    pub main_bar_dia: Millimeters,

    /// Main bars per column
    pub main_bar_count: Count,

    /// Tie bar diameter (mm)
    pub tie_bar_dia: Millimeters,

    /// Tie spacing (in)
    pub tie_spacing: Inches,

    /// Clear cover to ties (in)
    pub clear_cover: Inches,

    /// Concrete mix ratio, e.g. "1:2:4"
    pub mix_ratio: MixRatio,
}

impl ColumnParams {
    /// Floors with a missing value treated as a single floor
    pub fn effective_floors(&self) -> u32 {
        self.floors.0.max(1)
    }

    /// Total height of one column over all floors
    pub fn total_height(&self) -> Feet {
        self.height * f64::from(self.effective_floors())
    }
}

/// Column take-off.
pub fn calculate(params: &ColumnParams, constants: &EstimationConstants) -> MaterialQuantities {
    take_off(params, params.effective_floors(), params.lapping_length, constants)
}

/// Short column take-off: one lift, no laps.
pub fn calculate_short(params: &ColumnParams, constants: &EstimationConstants) -> MaterialQuantities {
    take_off(params, 1, Feet(0.0), constants)
}

fn take_off(params: &ColumnParams, floors: u32, lap: Feet, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let count = params.total_columns.as_f64();
    let width: Feet = params.width.into();
    let depth: Feet = params.depth.into();
    let height = params.height * f64::from(floors);

    let wet = CuFt(rectangle_area(width.0, depth.0) * height.0 * count);
    let formwork = rectangle_perimeter(width.0, depth.0) * height.0 * count;
    q.add(MaterialKey::Formwork, formwork);

    // Main bars: full height plus a lap at every floor joint
    let bar_length = height + lap * f64::from(floors.saturating_sub(1));
    let main_total = bar_length * params.main_bar_count.as_f64() * count;
    add_bars(&mut q, params.main_bar_dia, main_total, constants);

    // Ties
    let ties_per_column = spaced_count(height, params.tie_spacing);
    if ties_per_column > 0 && count > 0.0 {
        let ties = f64::from(ties_per_column) * count;
        let cutting = tie_cutting_length(
            params.width,
            params.depth,
            params.clear_cover,
            params.tie_bar_dia,
            constants.hook_bar_diameters,
        );
        q.add(MaterialKey::Ties, ties);
        add_bars(&mut q, params.tie_bar_dia, cutting * ties, constants);
    }

    add_concrete(&mut q, wet, &params.mix_ratio, constants);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::rebar::bar_unit_weight;
    use serde_json::json;

    fn test_column() -> ColumnParams {
        serde_json::from_value(json!({
            "width": 12, "depth": 12, "height": 10, "floors": 1,
            "totalColumns": 1, "lappingLength": 2,
            "mainBarDia": 16, "mainBarCount": 4,
            "tieBarDia": 10, "tieSpacing": 6, "clearCover": 1.5,
            "mixRatio": "1:2:4"
        }))
        .unwrap()
    }

    #[test]
    fn test_single_column_concrete() {
        let q = calculate(&test_column(), &EstimationConstants::default());
        assert!((q.amount(&MaterialKey::ConcreteVolume) - 10.0).abs() < 1e-9);
        assert!((q.amount(&MaterialKey::DryVolume) - 15.4).abs() < 1e-9);
        // 15.4 × 1 / (7 × 1.25) = 1.76 bags -> 2 after rounding
        assert!((q.amount(&MaterialKey::Cement) - 1.76).abs() < 1e-9);
        assert_eq!(q.rounded().amount(&MaterialKey::Cement), 2.0);
    }

    #[test]
    fn test_formwork_is_lateral_surface() {
        let q = calculate(&test_column(), &EstimationConstants::default());
        // perimeter 4 ft × 10 ft
        assert!((q.amount(&MaterialKey::Formwork) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_main_bars_and_ties() {
        let q = calculate(&test_column(), &EstimationConstants::default());
        // single floor: no lap, 4 bars × 10 ft
        let main = 40.0 * bar_unit_weight(Millimeters(16.0), 533.0);
        assert!((q.amount(&MaterialKey::Steel(16)) - main).abs() < 1e-9);
        // 120" / 6" = 20 ties
        assert_eq!(q.amount(&MaterialKey::Ties), 20.0);
        let tie_len = 3.0 + 200.0 / 304.8;
        let tie_kg = 20.0 * tie_len * bar_unit_weight(Millimeters(10.0), 533.0);
        assert!((q.amount(&MaterialKey::Steel(10)) - tie_kg).abs() < 1e-9);
    }

    #[test]
    fn test_multi_floor_laps() {
        let mut col = test_column();
        col.floors = Count(3);
        let q = calculate(&col, &EstimationConstants::default());
        // (30 + 2 × 2) ft × 4 bars
        let main = 136.0 * bar_unit_weight(Millimeters(16.0), 533.0);
        assert!((q.amount(&MaterialKey::Steel(16)) - main).abs() < 1e-9);
        assert!((q.amount(&MaterialKey::ConcreteVolume) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_column_ignores_floors() {
        let mut col = test_column();
        col.floors = Count(3);
        let q = calculate_short(&col, &EstimationConstants::default());
        assert!((q.amount(&MaterialKey::ConcreteVolume) - 10.0).abs() < 1e-9);
        let main = 40.0 * bar_unit_weight(Millimeters(16.0), 533.0);
        assert!((q.amount(&MaterialKey::Steel(16)) - main).abs() < 1e-9);
    }

    #[test]
    fn test_zero_columns_is_all_zero() {
        let mut col = test_column();
        col.total_columns = Count(0);
        let q = calculate(&col, &EstimationConstants::default());
        for (_, quantity) in q.iter() {
            assert_eq!(quantity.as_amount(), Some(0.0));
        }
    }

    #[test]
    fn test_zero_tie_spacing_skips_ties() {
        let mut col = test_column();
        col.tie_spacing = Inches(0.0);
        let q = calculate(&col, &EstimationConstants::default());
        assert!(q.get(&MaterialKey::Ties).is_none());
        assert!(q.get(&MaterialKey::Steel(10)).is_none());
    }

    #[test]
    fn test_missing_floors_defaults_to_one() {
        let col: ColumnParams = serde_json::from_value(json!({ "height": 10 })).unwrap();
        assert_eq!(col.effective_floors(), 1);
        assert_eq!(col.total_height(), Feet(10.0));
    }
}
