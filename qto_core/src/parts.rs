//! # Structural Parts
//!
//! A [`StructuralPart`] is one group of identical structural elements in a
//! project (e.g. "C1 corner columns, 8 nos."). Its `parameters` are stored
//! as raw JSON exactly as the editing form submitted them; the dispatcher
//! decodes them into the typed parameter set of the part's [`PartType`].
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "id": "b5b8c2e0-3c1d-4a55-9d8e-6d2f1f3c9a10",
//!   "name": "C1",
//!   "type": "column",
//!   "parameters": {
//!     "width": 12, "depth": 12, "height": 10, "floors": 1,
//!     "totalColumns": 8, "mainBarDia": 16, "mainBarCount": 4,
//!     "tieBarDia": 10, "tieSpacing": 6, "clearCover": 1.5,
//!     "mixRatio": "1:2:4"
//!   }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::CalcError;

/// Structural part type tag.
///
/// Tags serialize in camelCase (`"shortColumn"`). Parsing ignores case,
/// underscores, hyphens and spaces, so `"short_column"` and
/// `"Short Column"` are accepted too. Any other tag parses to
/// [`PartType::Unknown`], which estimates to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PartType {
    Column,
    ShortColumn,
    Beam,
    GradeBeam,
    Slab,
    /// Standalone (isolated) footing
    Footing,
    CombinedFooting,
    MatFoundation,
    PileCap,
    Pile,
    Staircase,
    RetainingWall,
    Brickwork,
    Earthwork,
    /// Lean concrete / soling
    CcCasting,
    #[default]
    Unknown,
}

/// Reporting category for a material summary by component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartCategory {
    Substructure,
    Superstructure,
    Masonry,
    SiteWork,
    Other,
}

impl PartCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PartCategory::Substructure => "Substructure",
            PartCategory::Superstructure => "Superstructure",
            PartCategory::Masonry => "Masonry",
            PartCategory::SiteWork => "Site work",
            PartCategory::Other => "Other",
        }
    }
}

impl PartType {
    /// Every known part type
    pub const ALL: [PartType; 15] = [
        PartType::Column,
        PartType::ShortColumn,
        PartType::Beam,
        PartType::GradeBeam,
        PartType::Slab,
        PartType::Footing,
        PartType::CombinedFooting,
        PartType::MatFoundation,
        PartType::PileCap,
        PartType::Pile,
        PartType::Staircase,
        PartType::RetainingWall,
        PartType::Brickwork,
        PartType::Earthwork,
        PartType::CcCasting,
    ];

    /// Canonical camelCase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Column => "column",
            PartType::ShortColumn => "shortColumn",
            PartType::Beam => "beam",
            PartType::GradeBeam => "gradeBeam",
            PartType::Slab => "slab",
            PartType::Footing => "footing",
            PartType::CombinedFooting => "combinedFooting",
            PartType::MatFoundation => "matFoundation",
            PartType::PileCap => "pileCap",
            PartType::Pile => "pile",
            PartType::Staircase => "staircase",
            PartType::RetainingWall => "retainingWall",
            PartType::Brickwork => "brickwork",
            PartType::Earthwork => "earthwork",
            PartType::CcCasting => "ccCasting",
            PartType::Unknown => "unknown",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PartType::Column => "Column",
            PartType::ShortColumn => "Short Column",
            PartType::Beam => "Beam",
            PartType::GradeBeam => "Grade Beam",
            PartType::Slab => "Slab",
            PartType::Footing => "Standalone Footing",
            PartType::CombinedFooting => "Combined Footing",
            PartType::MatFoundation => "Mat Foundation",
            PartType::PileCap => "Pile Cap",
            PartType::Pile => "Pile",
            PartType::Staircase => "Staircase",
            PartType::RetainingWall => "Retaining Wall",
            PartType::Brickwork => "Brickwork",
            PartType::Earthwork => "Earthwork",
            PartType::CcCasting => "CC Casting",
            PartType::Unknown => "Unknown",
        }
    }

    /// Component category for summary reports
    pub fn category(&self) -> PartCategory {
        match self {
            PartType::Footing
            | PartType::CombinedFooting
            | PartType::MatFoundation
            | PartType::PileCap
            | PartType::Pile
            | PartType::GradeBeam
            | PartType::ShortColumn
            | PartType::RetainingWall => PartCategory::Substructure,
            PartType::Column | PartType::Beam | PartType::Slab | PartType::Staircase => PartCategory::Superstructure,
            PartType::Brickwork => PartCategory::Masonry,
            PartType::Earthwork | PartType::CcCasting => PartCategory::SiteWork,
            PartType::Unknown => PartCategory::Other,
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PartType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let part_type = match normalized.as_str() {
            "column" => PartType::Column,
            "shortcolumn" => PartType::ShortColumn,
            "beam" => PartType::Beam,
            "gradebeam" => PartType::GradeBeam,
            "slab" => PartType::Slab,
            "footing" | "standalonefooting" | "isolatedfooting" => PartType::Footing,
            "combinedfooting" => PartType::CombinedFooting,
            "matfoundation" | "matfooting" | "mat" | "raft" => PartType::MatFoundation,
            "pilecap" => PartType::PileCap,
            "pile" => PartType::Pile,
            "staircase" | "stair" => PartType::Staircase,
            "retainingwall" => PartType::RetainingWall,
            "brickwork" => PartType::Brickwork,
            "earthwork" => PartType::Earthwork,
            "cccasting" | "leanconcrete" | "soling" => PartType::CcCasting,
            _ => PartType::Unknown,
        };
        Ok(part_type)
    }
}

impl Serialize for PartType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PartType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let part_type = match &value {
            Value::String(tag) => tag.parse().unwrap_or_default(),
            _ => PartType::Unknown,
        };
        if part_type == PartType::Unknown {
            log::debug!("Unrecognized part type tag {}", value);
        }
        Ok(part_type)
    }
}

/// One structural element group in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralPart {
    /// Opaque unique identifier
    #[serde(default)]
    pub id: String,

    /// User-facing label (e.g. "C1", "Ground floor slab")
    #[serde(default)]
    pub name: String,

    /// Part type; decides how `parameters` are read
    #[serde(rename = "type", default)]
    pub part_type: PartType,

    /// Type-specific inputs as submitted
    #[serde(default)]
    pub parameters: Value,
}

impl StructuralPart {
    /// Create a part with a fresh UUID.
    ///
    /// ```rust
    /// use qto_core::parts::{PartType, StructuralPart};
    /// use serde_json::json;
    ///
    /// let part = StructuralPart::new("S1", PartType::Slab, json!({ "length": 20, "width": 15 }));
    /// assert_eq!(part.part_type, PartType::Slab);
    /// assert!(!part.id.is_empty());
    /// ```
    pub fn new(name: impl Into<String>, part_type: PartType, parameters: Value) -> Self {
        StructuralPart {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            part_type,
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_parsing_is_forgiving() {
        assert_eq!("shortColumn".parse::<PartType>().unwrap(), PartType::ShortColumn);
        assert_eq!("short_column".parse::<PartType>().unwrap(), PartType::ShortColumn);
        assert_eq!("Retaining Wall".parse::<PartType>().unwrap(), PartType::RetainingWall);
        assert_eq!("pile-cap".parse::<PartType>().unwrap(), PartType::PileCap);
        assert_eq!("dome".parse::<PartType>().unwrap(), PartType::Unknown);
    }

    #[test]
    fn test_tags_roundtrip() {
        for t in PartType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            let back: PartType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn test_part_deserialization() {
        let part: StructuralPart = serde_json::from_value(json!({
            "id": "p-1",
            "name": "GB1",
            "type": "grade_beam",
            "parameters": { "width": 10 }
        }))
        .unwrap();
        assert_eq!(part.part_type, PartType::GradeBeam);
        assert_eq!(part.parameters["width"], json!(10));
    }

    #[test]
    fn test_unknown_and_missing_type() {
        let part: StructuralPart = serde_json::from_value(json!({ "type": 42 })).unwrap();
        assert_eq!(part.part_type, PartType::Unknown);
        let part: StructuralPart = serde_json::from_value(json!({ "name": "x" })).unwrap();
        assert_eq!(part.part_type, PartType::Unknown);
        assert_eq!(part.parameters, Value::Null);
    }

    #[test]
    fn test_categories() {
        assert_eq!(PartType::PileCap.category(), PartCategory::Substructure);
        assert_eq!(PartType::Slab.category(), PartCategory::Superstructure);
        assert_eq!(PartType::Brickwork.category(), PartCategory::Masonry);
        assert_eq!(PartType::Unknown.category(), PartCategory::Other);
    }
}
