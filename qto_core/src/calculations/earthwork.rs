//! # Earthwork
//!
//! Excavation volume = length × width × depth. Time and manpower estimates
//! are supplied from outside (site experience, contractor input) and are
//! passed through untouched as notes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::materials::{MaterialKey, MaterialQuantities};
use crate::units::Feet;

/// Label of the pass-through time estimate
pub const ESTIMATED_TIME: &str = "Estimated Time";

/// Label of the pass-through manpower estimate
pub const ESTIMATED_MANPOWER: &str = "Estimated Manpower";

/// Input parameters for an excavation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EarthworkParams {
    /// Pit or trench length (ft)
    pub length: Feet,

    /// Pit or trench width (ft)
    pub width: Feet,

    /// Excavation depth (ft)
    pub depth: Feet,

    /// Optional pass-through estimates: `{ "time": .., "manpower": .. }`,
    /// each value kept exactly as given
    pub estimation: Option<Value>,
}

/// Earthwork take-off.
pub fn calculate(params: &EarthworkParams) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    q.add(MaterialKey::Earthwork, params.length.0 * params.width.0 * params.depth.0);

    if let Some(estimate) = params.estimation.as_ref().and_then(Value::as_object) {
        for (field, label) in [("time", ESTIMATED_TIME), ("manpower", ESTIMATED_MANPOWER)] {
            match estimate.get(field) {
                Some(Value::Null) | None => {}
                Some(v) => q.note(MaterialKey::Note(label.to_string()), v.clone()),
            }
        }
    }
    q
}
