//! # Reinforcement Conventions
//!
//! Bar weights, cutting lengths and bar counts. Conventions follow common
//! bar-bending-schedule practice:
//!
//! - Unit weight: `d² / 533` kg per linear foot (d in mm)
//! - Hooks: two hooks of 10 bar diameters each on every tie or stirrup
//! - Ties and stirrups wrap the confined core (outer size minus twice the cover)
//! - Spaced bars: `ceil(extent / spacing) + 1`, the extra bar closing the far edge
//!
//! Every spacing-based count returns zero for a zero or negative spacing
//! instead of dividing by it.

use crate::equations::geometry::{ceil_whole, circumference, rectangle_perimeter};
use crate::units::{Feet, Inches, Millimeters};

/// Steel weight per linear foot of bar.
///
/// # Formula
/// w = d² / divisor  (kg/ft, d in mm, divisor normally 533)
///
/// # Example
/// ```rust
/// use qto_core::constants::UNIT_WEIGHT_DIVISOR;
/// use qto_core::equations::rebar::bar_unit_weight;
/// use qto_core::units::Millimeters;
///
/// let w = bar_unit_weight(Millimeters(16.0), UNIT_WEIGHT_DIVISOR);
/// assert!((w - 0.4803).abs() < 0.0001);
/// ```
pub fn bar_unit_weight(diameter: Millimeters, divisor: f64) -> f64 {
    if divisor <= 0.0 || !diameter.is_positive() {
        return 0.0;
    }
    diameter.0 * diameter.0 / divisor
}

/// Combined length of the two hooks on a tie or stirrup.
///
/// # Formula
/// L = 2 × k × d / (25.4 × 12)  (ft, with k bar diameters per hook)
pub fn hook_length(diameter: Millimeters, hook_bar_diameters: f64) -> Feet {
    Feet(2.0 * hook_bar_diameters * diameter.0 / (25.4 * 12.0))
}

/// Cutting length of one closed tie or stirrup.
///
/// ```text
///     ┌───────────────┐  outer width
///     │ ┌───────────┐ │
///     │ │   core    │ │  core = outer - 2 × cover
///     │ └───────────┘ │
///     └───────────────┘
/// ```
///
/// # Formula
/// L = 2 × ((b - 2c) + (h - 2c)) / 12 + hooks  (ft)
pub fn tie_cutting_length(
    outer_width: Inches,
    outer_depth: Inches,
    cover: Inches,
    diameter: Millimeters,
    hook_bar_diameters: f64,
) -> Feet {
    let core_width = (outer_width.0 - 2.0 * cover.0).max(0.0);
    let core_depth = (outer_depth.0 - 2.0 * cover.0).max(0.0);
    let perimeter: Feet = Inches(rectangle_perimeter(core_width, core_depth)).into();
    perimeter + hook_length(diameter, hook_bar_diameters)
}

/// Embedment allowance at one end of a bar anchored into a support.
///
/// The bar runs through the support width less the end cover.
pub fn development_length(support_width: Inches, cover: Inches) -> Feet {
    Inches((support_width.0 - cover.0).max(0.0)).into()
}

/// Number of bars laid at `spacing` across `extent`, including the edge bar.
///
/// # Example
/// ```rust
/// use qto_core::equations::rebar::bars_at_spacing;
/// use qto_core::units::{Feet, Inches};
///
/// // 10 ft at 6" c/c: 20 spaces, 21 bars
/// assert_eq!(bars_at_spacing(Feet(10.0), Inches(6.0)), 21);
/// assert_eq!(bars_at_spacing(Feet(10.0), Inches(0.0)), 0);
/// ```
pub fn bars_at_spacing(extent: Feet, spacing: Inches) -> u32 {
    match spaced_count(extent, spacing) {
        0 => 0,
        n => n.saturating_add(1),
    }
}

/// Number of spaces of `spacing` needed to cover `extent` (no edge bar).
pub fn spaced_count(extent: Feet, spacing: Inches) -> u32 {
    if !spacing.is_positive() || !extent.is_positive() {
        return 0;
    }
    let extent_in: Inches = extent.into();
    ceil_whole(extent_in.0 / spacing.0) as u32
}

/// Length of a helical spiral wound along a circular member.
///
/// The spiral sits on the confined circle: member diameter minus cover on
/// both sides minus one tie diameter (half on each side). Length is the
/// confined circumference times the number of turns over the member length.
///
/// # Formula
/// D_c = D - 2c - d_t
/// L = π D_c × (length / pitch)  (ft)
pub fn spiral_length(
    member_diameter: Inches,
    cover: Inches,
    tie_diameter: Millimeters,
    member_length: Feet,
    pitch: Inches,
) -> Feet {
    if !pitch.is_positive() || !member_length.is_positive() {
        return Feet(0.0);
    }
    let tie_in: Inches = tie_diameter.into();
    let confined = member_diameter.0 - 2.0 * cover.0 - tie_in.0;
    if confined <= 0.0 {
        return Feet(0.0);
    }
    let turns = Inches::from(member_length).0 / pitch.0;
    let turn_length: Feet = Inches(circumference(confined)).into();
    turn_length * turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HOOK_BAR_DIAMETERS, UNIT_WEIGHT_DIVISOR};

    #[test]
    fn test_unit_weight() {
        // 12mm: 144 / 533
        let w = bar_unit_weight(Millimeters(12.0), UNIT_WEIGHT_DIVISOR);
        assert!((w - 0.27017).abs() < 1e-4);
        assert_eq!(bar_unit_weight(Millimeters(0.0), UNIT_WEIGHT_DIVISOR), 0.0);
    }

    #[test]
    fn test_hook_length() {
        // 2 × 10 × 10mm = 200mm = 0.656 ft
        let hook = hook_length(Millimeters(10.0), HOOK_BAR_DIAMETERS);
        assert!((hook.0 - 0.65617).abs() < 1e-4);
    }

    #[test]
    fn test_tie_cutting_length() {
        // 12x12 column, 1.5" cover: core 9x9, perimeter 36" = 3 ft
        let len = tie_cutting_length(Inches(12.0), Inches(12.0), Inches(1.5), Millimeters(10.0), HOOK_BAR_DIAMETERS);
        assert!((len.0 - (3.0 + 0.65617)).abs() < 1e-4);
    }

    #[test]
    fn test_tie_cover_larger_than_section() {
        let len = tie_cutting_length(Inches(2.0), Inches(2.0), Inches(1.5), Millimeters(8.0), HOOK_BAR_DIAMETERS);
        let hook = hook_length(Millimeters(8.0), HOOK_BAR_DIAMETERS);
        assert!((len.0 - hook.0).abs() < 1e-12);
    }

    #[test]
    fn test_development_length() {
        assert_eq!(development_length(Inches(12.0), Inches(0.0)), Feet(1.0));
        assert_eq!(development_length(Inches(1.0), Inches(1.5)), Feet(0.0));
    }

    #[test]
    fn test_bar_counts() {
        assert_eq!(spaced_count(Feet(10.0), Inches(6.0)), 20);
        assert_eq!(spaced_count(Feet(10.0), Inches(7.0)), 18);
        assert_eq!(bars_at_spacing(Feet(0.0), Inches(6.0)), 0);
        assert_eq!(spaced_count(Feet(10.0), Inches(-6.0)), 0);
    }

    #[test]
    fn test_bar_count_saturates() {
        // 4.8e9 spaces does not fit in u32
        assert_eq!(spaced_count(Feet(4.0e8), Inches(1.0)), u32::MAX);
        assert_eq!(bars_at_spacing(Feet(4.0e8), Inches(1.0)), u32::MAX);
    }

    #[test]
    fn test_spiral_length() {
        // 20" pile, 3" cover, 10mm spiral, 10 ft at 6" pitch
        let len = spiral_length(Inches(20.0), Inches(3.0), Millimeters(10.0), Feet(10.0), Inches(6.0));
        let confined = 20.0 - 6.0 - 10.0 / 25.4;
        let expected = std::f64::consts::PI * confined / 12.0 * 20.0;
        assert!((len.0 - expected).abs() < 1e-9);
        assert_eq!(spiral_length(Inches(20.0), Inches(3.0), Millimeters(10.0), Feet(10.0), Inches(0.0)), Feet(0.0));
    }
}
