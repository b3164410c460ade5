//! # qto_core - Construction Quantity Take-off Engine
//!
//! `qto_core` turns the dimensions of structural parts (columns, beams,
//! slabs, footings, piles, stairs, walls, brickwork, earthwork) into the
//! materials needed to build them: concrete, cement bags, sand, aggregate,
//! steel by bar diameter, formwork, bricks and excavation volume.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from parameters to quantities
//! - **JSON-First**: Parts come in as JSON; quantities go out as JSON objects
//!   keyed by stable display strings (`"Cement (bags)"`, `"Steel 16mm (kg)"`)
//! - **Forgiving**: Estimation never fails; missing or malformed inputs
//!   contribute zero
//!
//! ## Quick Start
//!
//! ```rust
//! use qto_core::{aggregate_materials, PartType, StructuralPart};
//! use serde_json::json;
//!
//! let parts = vec![StructuralPart::new("C1", PartType::Column, json!({
//!     "width": 12, "depth": 12, "height": 10, "floors": 1, "totalColumns": 4,
//!     "mainBarDia": 16, "mainBarCount": 4,
//!     "tieBarDia": 10, "tieSpacing": 6, "clearCover": 1.5,
//!     "mixRatio": "1:2:4"
//! }))];
//!
//! let totals = aggregate_materials(&parts);
//! let json = serde_json::to_string_pretty(&totals).unwrap();
//! assert!(json.contains("\"Steel 16mm (kg)\""));
//! ```
//!
//! ## Modules
//!
//! - [`parts`] - Structural part model and type tags
//! - [`calculations`] - Per-type calculators and the [`Estimator`] dispatcher
//! - [`aggregate`] - Project totals and per-type and per-category grouping
//! - [`materials`] - Material keys, quantities, mix ratios
//! - [`costing`] - Pricing aggregated totals
//! - [`constants`] - Estimation factors, loadable from TOML
//! - [`equations`] - Geometry and rebar helpers
//! - [`units`] - Type-safe unit wrappers
//! - [`project`] - Project container
//! - [`file_io`] - Project file loading
//! - [`errors`] - Structured error types

pub mod aggregate;
pub mod calculations;
pub mod constants;
pub mod costing;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod parts;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use aggregate::{
    aggregate_materials, aggregate_materials_by_category, aggregate_materials_by_type, MaterialsByType,
};
pub use calculations::{calculate_part_materials, Estimator};
pub use constants::EstimationConstants;
pub use costing::{project_cost, CostBucket, CostEstimate, PriceTable};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, parse_project};
pub use materials::{MaterialKey, MaterialQuantities, Quantity};
pub use parts::{PartCategory, PartType, StructuralPart};
pub use project::{Project, ProjectMetadata};
