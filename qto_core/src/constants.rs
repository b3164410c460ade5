//! # Estimation Constants
//!
//! Every empirical factor the calculators rely on lives here as a named,
//! overridable value. The defaults match common practice for site
//! estimates; a regional or material standard can override any of them
//! from a TOML file without touching code.
//!
//! ## TOML Example
//!
//! ```toml
//! # Only the keys you list are overridden
//! dry_volume_multiplier = 1.57
//! bricks_per_cft = 12.0
//! ```
//!
//! ```rust
//! use qto_core::constants::EstimationConstants;
//!
//! let constants = EstimationConstants::from_toml_str("bricks_per_cft = 12.0").unwrap();
//! assert_eq!(constants.bricks_per_cft, 12.0);
//! assert_eq!(constants.dry_volume_multiplier, 1.54);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Wet-to-dry volume factor for concrete batching
pub const DRY_VOLUME_MULTIPLIER: f64 = 1.54;

/// Cubic feet per 50 kg cement bag
pub const CEMENT_BAG_VOLUME_CFT: f64 = 1.25;

/// Bricks broken down per cubic foot of khoa (brick aggregate)
pub const BRICKS_PER_CFT_AGGREGATE: f64 = 9.5;

/// Divisor in the steel unit weight formula `d² / 533` (kg per ft, d in mm)
pub const UNIT_WEIGHT_DIVISOR: f64 = 533.0;

/// Length of one standard hook, in bar diameters
pub const HOOK_BAR_DIAMETERS: f64 = 10.0;

/// Share of a brick wall's volume taken up by wet mortar joints
pub const MORTAR_WET_FRACTION: f64 = 0.25;

/// Wet-to-dry volume factor for mortar
pub const MORTAR_DRY_MULTIPLIER: f64 = 1.33;

/// Default brick laying rate (bricks per cft of wall, joints included)
pub const BRICKS_PER_CFT: f64 = 11.5;

/// Standard reinforcement bar diameters in mm
pub const STANDARD_BAR_DIAMETERS_MM: [u32; 9] = [8, 10, 12, 16, 20, 22, 25, 28, 32];

/// Check whether a bar diameter is one of the standard sizes
pub fn is_standard_bar(diameter_mm: u32) -> bool {
    STANDARD_BAR_DIAMETERS_MM.contains(&diameter_mm)
}

/// Named factors used by every calculator.
///
/// Missing keys in a TOML or JSON document keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConstants {
    /// Wet-to-dry concrete volume factor
    pub dry_volume_multiplier: f64,

    /// Volume of one cement bag (cft)
    pub cement_bag_volume_cft: f64,

    /// Bricks consumed per cft of khoa aggregate
    pub bricks_per_cft_aggregate: f64,

    /// Unit weight divisor: kg/ft = d² / divisor
    pub unit_weight_divisor: f64,

    /// Bar diameters per hook (two hooks per tie or stirrup)
    pub hook_bar_diameters: f64,

    /// Wet mortar volume as a fraction of brick wall volume
    pub mortar_wet_fraction: f64,

    /// Wet-to-dry mortar volume factor
    pub mortar_dry_multiplier: f64,

    /// Default bricks per cft of wall, used when a part gives no rate
    pub bricks_per_cft: f64,
}

impl Default for EstimationConstants {
    fn default() -> Self {
        EstimationConstants {
            dry_volume_multiplier: DRY_VOLUME_MULTIPLIER,
            cement_bag_volume_cft: CEMENT_BAG_VOLUME_CFT,
            bricks_per_cft_aggregate: BRICKS_PER_CFT_AGGREGATE,
            unit_weight_divisor: UNIT_WEIGHT_DIVISOR,
            hook_bar_diameters: HOOK_BAR_DIAMETERS,
            mortar_wet_fraction: MORTAR_WET_FRACTION,
            mortar_dry_multiplier: MORTAR_DRY_MULTIPLIER,
            bricks_per_cft: BRICKS_PER_CFT,
        }
    }
}

impl EstimationConstants {
    /// Parse constants from a TOML document and validate them.
    pub fn from_toml_str(source: &str) -> CalcResult<Self> {
        let constants: EstimationConstants = toml::from_str(source)
            .map_err(|e| CalcError::config_error("<toml>", e.to_string()))?;
        constants.validate()?;
        Ok(constants)
    }

    /// Load constants from a TOML file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let constants = Self::from_toml_str(&source)?;
        log::debug!("Loaded estimation constants from {}", path.display());
        Ok(constants)
    }

    /// Render the constants as TOML (for `qto constants`).
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::Internal {
            message: format!("failed to render constants: {}", e),
        })
    }

    /// All factors must be positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("dry_volume_multiplier", self.dry_volume_multiplier),
            ("cement_bag_volume_cft", self.cement_bag_volume_cft),
            ("bricks_per_cft_aggregate", self.bricks_per_cft_aggregate),
            ("unit_weight_divisor", self.unit_weight_divisor),
            ("hook_bar_diameters", self.hook_bar_diameters),
            ("mortar_wet_fraction", self.mortar_wet_fraction),
            ("mortar_dry_multiplier", self.mortar_dry_multiplier),
            ("bricks_per_cft", self.bricks_per_cft),
        ];
        for (key, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::config_error(key, format!("must be a positive number, got {}", value)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_named_constants() {
        let c = EstimationConstants::default();
        assert_eq!(c.dry_volume_multiplier, 1.54);
        assert_eq!(c.cement_bag_volume_cft, 1.25);
        assert_eq!(c.bricks_per_cft_aggregate, 9.5);
        assert_eq!(c.unit_weight_divisor, 533.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_override() {
        let c = EstimationConstants::from_toml_str("dry_volume_multiplier = 1.57\n").unwrap();
        assert_eq!(c.dry_volume_multiplier, 1.57);
        assert_eq!(c.cement_bag_volume_cft, CEMENT_BAG_VOLUME_CFT);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = EstimationConstants::from_toml_str("cement_bag_volume_cft = 0.0").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("cement_bag_volume_cft"));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = EstimationConstants::from_toml_str("bricks_per_cft = \"many\"").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_toml_roundtrip() {
        let c = EstimationConstants::default();
        let text = c.to_toml_string().unwrap();
        assert!(text.contains("unit_weight_divisor"));
        assert_eq!(EstimationConstants::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn test_standard_bars() {
        assert!(is_standard_bar(16));
        assert!(!is_standard_bar(14));
    }
}
