//! # Brickwork Take-off
//!
//! Bricks and mortar for a masonry wall with door and window openings.
//!
//! - Net area = length × height - doors - windows (never below zero)
//! - Bricks = net volume × bricks per cft × (1 + wastage%)
//! - Wet mortar = 25% of net wall volume; dry mortar = wet × 1.33 × (1 + wastage%)
//! - Cement and sand split from dry mortar by the two-part mortar ratio
//!
//! Returns only bricks, cement and sand: no steel, no formwork.
//!
//! ## Example
//!
//! ```rust
//! use qto_core::calculations::brickwork::{calculate, BrickworkParams};
//! use qto_core::constants::EstimationConstants;
//! use qto_core::materials::MaterialKey;
//! use serde_json::json;
//!
//! let wall: BrickworkParams = serde_json::from_value(json!({
//!     "length": 20, "height": 10, "thickness": 10,
//!     "brickWastage": 5, "mortarRatio": "1:4"
//! })).unwrap();
//! let q = calculate(&wall, &EstimationConstants::default());
//! assert!(q.amount(&MaterialKey::TotalBricks) > 0.0);
//! assert_eq!(q.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::materials::{add_mortar, MaterialKey, MaterialQuantities, MixRatio};
use crate::units::{lenient_f64, Count, CuFt, Feet, Inches, Percent, SqFt};

/// Input parameters for a brick wall.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrickworkParams {
    /// Wall length (ft)
    pub length: Feet,

    /// Wall height (ft)
    pub height: Feet,

    /// Wall thickness (in)
    pub thickness: Inches,

    /// Number of door openings
    pub door_count: Count,

    /// Door width (ft)
    pub door_width: Feet,

    /// Door height (ft)
    pub door_height: Feet,

    /// Number of window openings
    pub window_count: Count,

    /// Window width (ft)
    pub window_width: Feet,

    /// Window height (ft)
    pub window_height: Feet,

    /// Brick wastage (%)
    pub brick_wastage: Percent,

    /// Bricks per cft of wall; the configured default when zero
    #[serde(deserialize_with = "lenient_f64")]
    pub bricks_per_cft: f64,

    /// Mortar ratio, cement:sand (e.g. "1:4")
    pub mortar_ratio: MixRatio,
}

impl BrickworkParams {
    /// Wall face area after deducting openings
    pub fn net_area(&self) -> SqFt {
        let gross = self.length.0 * self.height.0;
        let doors = self.door_count.as_f64() * self.door_width.0 * self.door_height.0;
        let windows = self.window_count.as_f64() * self.window_width.0 * self.window_height.0;
        SqFt((gross - doors - windows).max(0.0))
    }

    /// Net wall volume
    pub fn net_volume(&self) -> CuFt {
        let thickness: Feet = self.thickness.into();
        CuFt(self.net_area().0 * thickness.0)
    }
}

/// Brickwork take-off.
pub fn calculate(params: &BrickworkParams, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let volume = params.net_volume();
    let wastage = params.brick_wastage.factor();
    let rate = if params.bricks_per_cft > 0.0 && params.bricks_per_cft.is_finite() {
        params.bricks_per_cft
    } else {
        constants.bricks_per_cft
    };

    q.add(MaterialKey::TotalBricks, volume.0 * rate * wastage);

    let wet_mortar = volume.0 * constants.mortar_wet_fraction;
    let dry_mortar = CuFt(wet_mortar * constants.mortar_dry_multiplier * wastage);
    add_mortar(&mut q, dry_mortar, &params.mortar_ratio, constants);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_wall() -> BrickworkParams {
        serde_json::from_value(json!({
            "length": 20, "height": 10, "thickness": 10,
            "doorCount": 1, "doorWidth": 3, "doorHeight": 7,
            "windowCount": 2, "windowWidth": 4, "windowHeight": 4,
            "brickWastage": 5, "mortarRatio": "1:4"
        }))
        .unwrap()
    }

    #[test]
    fn test_net_area_deducts_openings() {
        let wall = test_wall();
        // 200 - 21 - 32
        assert_eq!(wall.net_area(), SqFt(147.0));
        assert!((wall.net_volume().0 - 122.5).abs() < 1e-9);
    }

    #[test]
    fn test_bricks_and_mortar() {
        let q = calculate(&test_wall(), &EstimationConstants::default());
        let volume = 122.5;
        assert!((q.amount(&MaterialKey::TotalBricks) - volume * 11.5 * 1.05).abs() < 1e-9);
        let dry = volume * 0.25 * 1.33 * 1.05;
        assert!((q.amount(&MaterialKey::Cement) - dry / (5.0 * 1.25)).abs() < 1e-9);
        assert!((q.amount(&MaterialKey::Sand) - dry * 4.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_bricks_cement_sand() {
        let q = calculate(&test_wall(), &EstimationConstants::default());
        let keys: Vec<_> = q.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![MaterialKey::Cement, MaterialKey::Sand, MaterialKey::TotalBricks]);
    }

    #[test]
    fn test_wastage_increases_bricks() {
        let mut low = test_wall();
        low.brick_wastage = Percent(5.0);
        let mut high = test_wall();
        high.brick_wastage = Percent(10.0);
        let c = EstimationConstants::default();
        let low_bricks = calculate(&low, &c).rounded().amount(&MaterialKey::TotalBricks);
        let high_bricks = calculate(&high, &c).rounded().amount(&MaterialKey::TotalBricks);
        assert!(high_bricks > low_bricks);
    }

    #[test]
    fn test_custom_brick_rate() {
        let mut wall = test_wall();
        wall.bricks_per_cft = 12.0;
        wall.brick_wastage = Percent(0.0);
        let q = calculate(&wall, &EstimationConstants::default());
        assert!((q.amount(&MaterialKey::TotalBricks) - 122.5 * 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_openings_larger_than_wall() {
        let mut wall = test_wall();
        wall.door_count = Count(20);
        let q = calculate(&wall, &EstimationConstants::default());
        assert_eq!(q.amount(&MaterialKey::TotalBricks), 0.0);
    }
}
