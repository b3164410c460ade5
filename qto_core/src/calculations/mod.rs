//! # Part Calculators
//!
//! One pure take-off function per structural part type. Each calculator
//! follows the pattern:
//!
//! - `*Params` - Typed, lenient input parameters (JSON-deserializable)
//! - `calculate(params, constants) -> MaterialQuantities` - Pure function, never fails
//!
//! [`Estimator`] routes a [`StructuralPart`] to its calculator. Unknown part
//! types produce an empty result; missing parameters default to zero.
//!
//! ## Available Calculators
//!
//! - [`column`] - Columns and short columns
//! - [`beam`] - Floor beams and grade beams
//! - [`slab`] - Two-way slabs
//! - [`footing`] - Standalone, combined and mat footings, pile caps
//! - [`pile`] - Bored circular piles
//! - [`staircase`] - Waist-slab staircases with landings
//! - [`retaining_wall`] - Cantilever retaining walls
//! - [`brickwork`] - Brick masonry walls
//! - [`earthwork`] - Excavation
//! - [`cc_casting`] - Lean concrete / soling
//!
//! ## Example
//!
//! ```rust
//! use qto_core::calculations::calculate_part_materials;
//! use qto_core::parts::{PartType, StructuralPart};
//! use serde_json::json;
//!
//! let part = StructuralPart::new("C1", PartType::Column, json!({
//!     "width": 12, "depth": 12, "height": 10, "floors": 1, "totalColumns": 1,
//!     "mixRatio": "1:2:4"
//! }));
//!
//! let q = calculate_part_materials(&part);
//! assert_eq!(q.get_by_label("Cement (bags)").and_then(|c| c.as_amount()), Some(2.0));
//! ```

pub mod beam;
pub mod brickwork;
pub mod cc_casting;
pub mod column;
pub mod earthwork;
pub mod footing;
pub mod pile;
pub mod retaining_wall;
pub mod slab;
pub mod staircase;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::constants::EstimationConstants;
use crate::materials::MaterialQuantities;
use crate::parts::{PartType, StructuralPart};

pub use beam::{BeamKind, BeamParams};
pub use brickwork::BrickworkParams;
pub use cc_casting::CcCastingParams;
pub use column::ColumnParams;
pub use earthwork::EarthworkParams;
pub use footing::{FootingKind, FootingParams};
pub use pile::PileParams;
pub use retaining_wall::RetainingWallParams;
pub use slab::SlabParams;
pub use staircase::StaircaseParams;

/// Estimation entry point carrying the constants every calculator uses.
///
/// Stateless apart from the constants, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Estimator {
    constants: EstimationConstants,
}

impl Estimator {
    /// Create an estimator with custom constants
    pub fn new(constants: EstimationConstants) -> Self {
        Estimator { constants }
    }

    /// Constants in use
    pub fn constants(&self) -> &EstimationConstants {
        &self.constants
    }

    /// Materials for one part, rounded for reporting.
    pub fn part_materials(&self, part: &StructuralPart) -> MaterialQuantities {
        self.raw_part_materials(part).rounded()
    }

    /// Materials for one part before rounding. Aggregation sums these so
    /// rounding is applied once, to the totals.
    pub fn raw_part_materials(&self, part: &StructuralPart) -> MaterialQuantities {
        log::debug!("Estimating part '{}' ({}) as {}", part.name, part.id, part.part_type);
        let c = &self.constants;
        match part.part_type {
            PartType::Column => column::calculate(&decode(part), c),
            PartType::ShortColumn => column::calculate_short(&decode(part), c),
            PartType::Beam => beam::calculate(&decode(part), BeamKind::Floor, c),
            PartType::GradeBeam => beam::calculate(&decode(part), BeamKind::Grade, c),
            PartType::Slab => slab::calculate(&decode(part), c),
            PartType::Footing => footing::calculate(&decode(part), FootingKind::Standalone, c),
            PartType::CombinedFooting => footing::calculate(&decode(part), FootingKind::Combined, c),
            PartType::MatFoundation => footing::calculate(&decode(part), FootingKind::Mat, c),
            PartType::PileCap => footing::calculate(&decode(part), FootingKind::PileCap, c),
            PartType::Pile => pile::calculate(&decode(part), c),
            PartType::Staircase => staircase::calculate(&decode(part), c),
            PartType::RetainingWall => retaining_wall::calculate(&decode(part), c),
            PartType::Brickwork => brickwork::calculate(&decode(part), c),
            PartType::Earthwork => earthwork::calculate(&decode(part)),
            PartType::CcCasting => cc_casting::calculate(&decode(part), c),
            PartType::Unknown => {
                log::warn!("Part '{}' ({}) has an unrecognized type; no materials estimated", part.name, part.id);
                MaterialQuantities::new()
            }
        }
    }
}

/// Materials for one part using the default constants.
pub fn calculate_part_materials(part: &StructuralPart) -> MaterialQuantities {
    Estimator::default().part_materials(part)
}

/// Decode a part's raw parameters into the calculator's typed set.
///
/// Non-object parameters are read as an empty object. Fields that do not
/// belong to the type are ignored and missing ones default to zero; if
/// decoding still fails the defaults are used.
fn decode<P: DeserializeOwned + Default>(part: &StructuralPart) -> P {
    let params = match &part.parameters {
        Value::Object(_) => part.parameters.clone(),
        _ => Value::Object(Map::new()),
    };
    serde_json::from_value(params).unwrap_or_else(|e| {
        log::warn!("Part '{}' ({}): unreadable parameters, using defaults: {}", part.name, part.id, e);
        P::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{MaterialKey, Quantity};
    use serde_json::json;

    fn column_part() -> StructuralPart {
        StructuralPart::new(
            "C1",
            PartType::Column,
            json!({
                "width": 12, "depth": 12, "height": 10, "floors": 1, "totalColumns": 1,
                "mainBarDia": 16, "mainBarCount": 4,
                "tieBarDia": 10, "tieSpacing": 6, "clearCover": 1.5,
                "mixRatio": "1:2:4"
            }),
        )
    }

    #[test]
    fn test_column_cement_rounds_up() {
        let q = calculate_part_materials(&column_part());
        assert_eq!(q.amount(&MaterialKey::Cement), 2.0);
        assert_eq!(q.amount(&MaterialKey::DryVolume), 15.4);
    }

    #[test]
    fn test_deterministic() {
        let part = column_part();
        assert_eq!(calculate_part_materials(&part), calculate_part_materials(&part));
    }

    #[test]
    fn test_unknown_type_is_empty() {
        let part: StructuralPart =
            serde_json::from_value(json!({ "id": "x", "name": "Dome", "type": "geodesicDome", "parameters": { "radius": 10 } }))
                .unwrap();
        assert!(calculate_part_materials(&part).is_empty());
    }

    #[test]
    fn test_foreign_fields_are_ignored() {
        let mut part = column_part();
        part.parameters["extraTopCount"] = json!(4);
        part.parameters["thickness"] = json!("wrong type on purpose");
        assert_eq!(calculate_part_materials(&part), calculate_part_materials(&column_part()));
    }

    #[test]
    fn test_missing_parameters_give_partial_result() {
        let part = StructuralPart::new("B1", PartType::Beam, Value::Null);
        let q = calculate_part_materials(&part);
        // Formwork line is present but zero; no ratio means no concrete lines
        assert_eq!(q.amount(&MaterialKey::Formwork), 0.0);
        assert!(q.get(&MaterialKey::Cement).is_none());
    }

    #[test]
    fn test_string_numbers_from_forms() {
        let part = StructuralPart::new(
            "C1",
            PartType::Column,
            json!({
                "width": "12", "depth": "12", "height": "10", "floors": "1", "totalColumns": "1",
                "mixRatio": "1:2:4"
            }),
        );
        assert_eq!(calculate_part_materials(&part).amount(&MaterialKey::ConcreteVolume), 10.0);
    }

    #[test]
    fn test_every_known_type_dispatches() {
        for part_type in PartType::ALL {
            let part = StructuralPart::new("p", part_type, json!({}));
            // Must not panic; earthwork always reports its volume line
            let q = calculate_part_materials(&part);
            if part_type == PartType::Earthwork {
                assert_eq!(q.get(&MaterialKey::Earthwork), Some(&Quantity::Amount(0.0)));
            }
        }
    }

    #[test]
    fn test_custom_constants() {
        let constants = EstimationConstants {
            dry_volume_multiplier: 1.5,
            ..EstimationConstants::default()
        };
        let q = Estimator::new(constants).part_materials(&column_part());
        assert_eq!(q.amount(&MaterialKey::DryVolume), 15.0);
    }

    #[test]
    fn test_short_column_and_grade_beam_routes() {
        let mut part = column_part();
        part.part_type = PartType::ShortColumn;
        part.parameters["floors"] = json!(3);
        let q = calculate_part_materials(&part);
        assert_eq!(q.amount(&MaterialKey::ConcreteVolume), 10.0);
    }
}
