//! # Project Data Structures
//!
//! The `Project` struct is the root container for an estimate: a header and
//! the ordered list of structural parts. Projects serialize as
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, name, client, timestamps)
//! └── parts: Vec<StructuralPart> (in entry order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use qto_core::parts::PartType;
//! use qto_core::project::Project;
//! use serde_json::json;
//!
//! let mut project = Project::new("Duplex, Plot 14", "R. Karim");
//! project.add_part("Pit", PartType::Earthwork, json!({ "length": 10, "width": 10, "depth": 4 }));
//!
//! let totals = project.materials();
//! assert_eq!(totals.get_by_label("Earthwork (cft)").and_then(|q| q.as_amount()), Some(400.0));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregate::{aggregate_materials, aggregate_materials_by_type, MaterialsByType};
use crate::materials::MaterialQuantities;
use crate::parts::{PartType, StructuralPart};

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Root project container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, name, client)
    pub meta: ProjectMetadata,

    /// Structural parts in entry order
    #[serde(default)]
    pub parts: Vec<StructuralPart>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// ```rust
    /// use qto_core::project::Project;
    ///
    /// let project = Project::new("Warehouse", "Client Corp");
    /// assert_eq!(project.meta.name, "Warehouse");
    /// assert_eq!(project.part_count(), 0);
    /// ```
    pub fn new(name: impl Into<String>, client: impl Into<String>) -> Self {
        Project {
            meta: ProjectMetadata::new(name, client),
            parts: Vec::new(),
        }
    }

    /// Wrap bare parts in a project with a blank header.
    pub fn from_parts(parts: Vec<StructuralPart>) -> Self {
        Project {
            meta: ProjectMetadata::new("", ""),
            parts,
        }
    }

    /// Add a part, returning the id assigned to it.
    pub fn add_part(&mut self, name: impl Into<String>, part_type: PartType, parameters: Value) -> String {
        let part = StructuralPart::new(name, part_type, parameters);
        let id = part.id.clone();
        self.parts.push(part);
        self.touch();
        id
    }

    /// Remove a part by id.
    ///
    /// Returns the removed part if it existed.
    pub fn remove_part(&mut self, id: &str) -> Option<StructuralPart> {
        let index = self.parts.iter().position(|p| p.id == id)?;
        let part = self.parts.remove(index);
        self.touch();
        Some(part)
    }

    /// Get a part by id.
    pub fn get_part(&self, id: &str) -> Option<&StructuralPart> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Project-wide material totals with the default constants.
    pub fn materials(&self) -> MaterialQuantities {
        aggregate_materials(&self.parts)
    }

    /// Per-type material totals with the default constants.
    pub fn materials_by_type(&self) -> MaterialsByType {
        aggregate_materials_by_type(&self.parts)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Project name
    #[serde(default)]
    pub name: String,

    /// Client name
    #[serde(default)]
    pub client: String,

    /// When the project was created
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,

    /// When the project was last modified
    #[serde(default = "Utc::now")]
    pub modified: DateTime<Utc>,
}

impl ProjectMetadata {
    fn new(name: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        ProjectMetadata {
            version: SCHEMA_VERSION.to_string(),
            name: name.into(),
            client: client.into(),
            created: now,
            modified: now,
        }
    }
}
