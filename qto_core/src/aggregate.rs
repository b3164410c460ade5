//! # Project Aggregation
//!
//! Combines per-part material quantities into project totals.
//!
//! - Amounts with the same key are summed; steel is keyed by diameter, so
//!   two column groups with 16mm bars land in one `Steel 16mm (kg)` line
//! - Notes (e.g. an earthwork time estimate) keep the first value seen
//! - Rounding is applied once, to the final totals, never to each addend;
//!   category totals are summed from raw part quantities, not from rounded
//!   per-type totals
//!
//! ## Example
//!
//! ```rust
//! use qto_core::aggregate::aggregate_materials;
//! use qto_core::parts::{PartType, StructuralPart};
//! use serde_json::json;
//!
//! let parts = vec![
//!     StructuralPart::new("Pit A", PartType::Earthwork, json!({ "length": 10, "width": 10, "depth": 5 })),
//!     StructuralPart::new("Pit B", PartType::Earthwork, json!({ "length": 10, "width": 5, "depth": 5 })),
//! ];
//! let totals = aggregate_materials(&parts);
//! assert_eq!(totals.get_by_label("Earthwork (cft)").and_then(|q| q.as_amount()), Some(750.0));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::calculations::Estimator;
use crate::materials::MaterialQuantities;
use crate::parts::{PartCategory, PartType, StructuralPart};

/// Material totals grouped by part type, plus the grand total.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MaterialsByType {
    /// Rounded totals for each part type present in the project
    pub by_type: BTreeMap<PartType, MaterialQuantities>,

    /// Rounded grand total across every type
    pub total: MaterialQuantities,
}

impl MaterialsByType {
    /// Totals for one part type, if the project has any
    pub fn get(&self, part_type: PartType) -> Option<&MaterialQuantities> {
        self.by_type.get(&part_type)
    }
}

impl Estimator {
    /// Project-wide material totals.
    pub fn aggregate(&self, parts: &[StructuralPart]) -> MaterialQuantities {
        let mut totals = MaterialQuantities::new();
        for part in parts {
            totals.merge(&self.raw_part_materials(part));
        }
        log::debug!("Aggregated {} parts into {} material lines", parts.len(), totals.len());
        totals.rounded()
    }

    /// Material totals per part type, then the grand total.
    ///
    /// Unknown parts contribute nothing and get no group.
    pub fn aggregate_by_type(&self, parts: &[StructuralPart]) -> MaterialsByType {
        let mut raw: BTreeMap<PartType, MaterialQuantities> = BTreeMap::new();
        let mut total = MaterialQuantities::new();

        for part in parts {
            if part.part_type == PartType::Unknown {
                log::warn!("Skipping part '{}' ({}) with unrecognized type", part.name, part.id);
                continue;
            }
            let quantities = self.raw_part_materials(part);
            total.merge(&quantities);
            raw.entry(part.part_type).or_default().merge(&quantities);
        }

        MaterialsByType {
            by_type: raw.into_iter().map(|(t, q)| (t, q.rounded())).collect(),
            total: total.rounded(),
        }
    }

    /// Material totals per component category.
    ///
    /// Raw part quantities are summed per category and rounded once, so two
    /// types sharing a category never round their cement bags separately.
    pub fn aggregate_by_category(&self, parts: &[StructuralPart]) -> BTreeMap<PartCategory, MaterialQuantities> {
        let mut raw: BTreeMap<PartCategory, MaterialQuantities> = BTreeMap::new();
        for part in parts.iter().filter(|p| p.part_type != PartType::Unknown) {
            raw.entry(part.part_type.category())
                .or_default()
                .merge(&self.raw_part_materials(part));
        }
        raw.into_iter().map(|(c, q)| (c, q.rounded())).collect()
    }
}

/// Project totals using the default constants.
pub fn aggregate_materials(parts: &[StructuralPart]) -> MaterialQuantities {
    Estimator::default().aggregate(parts)
}

/// Per-type totals using the default constants.
pub fn aggregate_materials_by_type(parts: &[StructuralPart]) -> MaterialsByType {
    Estimator::default().aggregate_by_type(parts)
}

/// Per-category totals using the default constants.
pub fn aggregate_materials_by_category(parts: &[StructuralPart]) -> BTreeMap<PartCategory, MaterialQuantities> {
    Estimator::default().aggregate_by_category(parts)
}
