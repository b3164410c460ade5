//! Concrete, mortar and reinforcement take-off
//!
//! Shared post-processing applied by the part calculators once they know
//! the wet concrete volume and bar lengths of a part.

use crate::constants::EstimationConstants;
use crate::equations::rebar::bar_unit_weight;
use crate::materials::mix::MixRatio;
use crate::materials::quantities::{MaterialKey, MaterialQuantities};
use crate::units::{CuFt, Feet, Millimeters};

/// Split a wet concrete volume into cement, sand and aggregate.
///
/// # Formulas
/// - dry = wet × 1.54
/// - cement (bags) = dry × c / (Σ × 1.25)
/// - sand = dry × s / Σ
/// - aggregate = dry × a / Σ, and khoa bricks = aggregate × 9.5
///
/// A ratio that sums to zero adds nothing, leaving whatever steel and
/// formwork the calculator already recorded.
///
/// ```rust
/// use qto_core::constants::EstimationConstants;
/// use qto_core::materials::{add_concrete, MaterialKey, MaterialQuantities, MixRatio};
/// use qto_core::units::CuFt;
///
/// let mut q = MaterialQuantities::new();
/// let ratio = MixRatio::parse("1:2:4").unwrap();
/// add_concrete(&mut q, CuFt(10.0), &ratio, &EstimationConstants::default());
/// assert!((q.amount(&MaterialKey::DryVolume) - 15.4).abs() < 1e-9);
/// assert!((q.amount(&MaterialKey::Cement) - 1.76).abs() < 1e-9);
/// ```
pub fn add_concrete(q: &mut MaterialQuantities, wet: CuFt, ratio: &MixRatio, constants: &EstimationConstants) {
    let sum = ratio.sum();
    if sum <= 0.0 {
        return;
    }

    let dry = wet.0 * constants.dry_volume_multiplier;
    q.add(MaterialKey::ConcreteVolume, wet.0);
    q.add(MaterialKey::DryVolume, dry);
    q.add(MaterialKey::Cement, dry * ratio.cement() / (sum * constants.cement_bag_volume_cft));
    q.add(MaterialKey::Sand, dry * ratio.sand() / sum);

    if let Some(share) = ratio.aggregate() {
        let aggregate = dry * share / sum;
        q.add(MaterialKey::Aggregate, aggregate);
        q.add(MaterialKey::KhoaBricks, aggregate * constants.bricks_per_cft_aggregate);
    }
}

/// Split a dry mortar volume into cement and sand. Any third ratio part is
/// ignored; mortar carries no aggregate.
pub fn add_mortar(q: &mut MaterialQuantities, dry: CuFt, ratio: &MixRatio, constants: &EstimationConstants) {
    let sum = ratio.cement() + ratio.sand();
    if sum <= 0.0 {
        return;
    }
    q.add(MaterialKey::Cement, dry.0 * ratio.cement() / (sum * constants.cement_bag_volume_cft));
    q.add(MaterialKey::Sand, dry.0 * ratio.sand() / sum);
}

/// Record the weight of a bar group under its diameter's steel key.
///
/// Groups with no diameter or no length are skipped, so an unused optional
/// group never creates an empty `Steel 0mm` line.
pub fn add_bars(q: &mut MaterialQuantities, diameter: Millimeters, total_length: Feet, constants: &EstimationConstants) {
    let mm = diameter.whole_mm();
    if mm == 0 || !total_length.is_positive() {
        return;
    }
    let kg = total_length.0 * bar_unit_weight(diameter, constants.unit_weight_divisor);
    q.add(MaterialKey::steel(mm), kg);
}
