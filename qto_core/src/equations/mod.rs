//! # Estimation Equations
//!
//! Reusable formulas shared by the part calculators. Keeping them in one
//! place makes the unit conversions easy to audit.
//!
//! ## Modules
//!
//! - [`geometry`] - Plane geometry primitives (perimeter, circle area, hypotenuse)
//! - [`rebar`] - Reinforcement conventions (unit weight, hooks, ties, bar counts)
//!
//! ## Unit Conventions
//!
//! - Geometry helpers are unit-agnostic: results are in the units of the inputs
//! - Rebar helpers take typed units and return feet or kg

pub mod geometry;
pub mod rebar;

pub use geometry::{
    rectangle_area,
    rectangle_perimeter,
    circle_area,
    circumference,
    hypotenuse,
    ceil_whole,
};

pub use rebar::{
    bar_unit_weight,
    hook_length,
    tie_cutting_length,
    development_length,
    bars_at_spacing,
    spaced_count,
    spiral_length,
};
