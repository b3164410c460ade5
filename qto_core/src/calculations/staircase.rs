//! # Staircase Take-off
//!
//! Dog-legged or straight flights, each made of an inclined waist slab with
//! triangular steps on top and a landing slab at the end.
//!
//! ```text
//!                      ____ landing
//!                 ____|
//!            ____|   /
//!       ____|      /   waist (inclined length = √(going² + rise²))
//!  ____|         /
//! |            /
//! ```
//!
//! - Steps per flight = ceil(rise / riser); each step adds ½ × riser × tread × width
//! - Tread defaults to going / steps when not given
//! - Formwork: soffit (waist + landing) plus both side profiles of the flight
//! - Main bars run the inclined length plus the landing, spaced across the width
//! - Distribution bars run across the width, spaced along the main bars

use serde::{Deserialize, Serialize};

use crate::constants::EstimationConstants;
use crate::equations::geometry::{ceil_whole, hypotenuse};
use crate::equations::rebar::bars_at_spacing;
use crate::materials::{add_bars, add_concrete, MaterialKey, MaterialQuantities, MixRatio};
use crate::units::{Count, CuFt, Feet, Inches, Millimeters};

/// Input parameters for a staircase.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width": 4, "horizontalLength": 10, "verticalHeight": 5,
///   "riser": 6, "tread": 10, "waistThickness": 6,
///   "landingLength": 4, "landingThickness": 6, "flights": 2,
///   "mainBarDia": 12, "mainBarSpacing": 5,
///   "distBarDia": 10, "distBarSpacing": 8,
///   "mixRatio": "1:2:4"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaircaseParams {
    /// Flight width (ft)
    pub width: Feet,

    /// Horizontal going of one flight (ft)
    pub horizontal_length: Feet,

    /// Vertical rise of one flight (ft)
    pub vertical_height: Feet,

    /// Riser height (in)
    pub riser: Inches,

    /// Tread depth (in); derived from the going when zero
    pub tread: Inches,

    /// Waist slab thickness (in)
    pub waist_thickness: Inches,

    /// Landing length along the direction of travel (ft)
    pub landing_length: Feet,

    /// Landing slab thickness (in); waist thickness when zero
    pub landing_thickness: Inches,

    /// Number of flights
    pub flights: Count,

    /// Main bar diameter (mm)
    pub main_bar_dia: Millimeters,

    /// Main bar spacing (in)
    pub main_bar_spacing: Inches,

    /// Distribution bar diameter (mm)
    pub dist_bar_dia: Millimeters,

    /// Distribution bar spacing (in)
    pub dist_bar_spacing: Inches,

    /// Concrete mix ratio
    pub mix_ratio: MixRatio,
}

impl StaircaseParams {
    /// Inclined length of the waist slab
    pub fn inclined_length(&self) -> Feet {
        Feet(hypotenuse(self.horizontal_length.0, self.vertical_height.0))
    }

    /// Number of steps in one flight
    pub fn steps(&self) -> u32 {
        if !self.riser.is_positive() || !self.vertical_height.is_positive() {
            return 0;
        }
        ceil_whole(Inches::from(self.vertical_height).0 / self.riser.0) as u32
    }

    /// Tread depth, derived from the going when not given
    pub fn effective_tread(&self) -> Inches {
        if self.tread.is_positive() {
            return self.tread;
        }
        match self.steps() {
            0 => Inches(0.0),
            n => Inches::from(self.horizontal_length) / f64::from(n),
        }
    }

    fn effective_landing_thickness(&self) -> Inches {
        if self.landing_thickness.is_positive() {
            self.landing_thickness
        } else {
            self.waist_thickness
        }
    }
}

/// Staircase take-off.
pub fn calculate(params: &StaircaseParams, constants: &EstimationConstants) -> MaterialQuantities {
    let mut q = MaterialQuantities::new();
    let flights = params.flights.as_f64();
    let inclined = params.inclined_length();
    let width = params.width;
    let waist: Feet = params.waist_thickness.into();
    let riser: Feet = params.riser.into();
    let tread: Feet = params.effective_tread().into();
    let landing_thickness: Feet = params.effective_landing_thickness().into();
    let steps = f64::from(params.steps());

    let step_profile = 0.5 * riser.0 * tread.0 * steps;
    let waist_volume = inclined.0 * width.0 * waist.0;
    let steps_volume = step_profile * width.0;
    let landing_volume = params.landing_length.0 * width.0 * landing_thickness.0;
    let wet = CuFt((waist_volume + steps_volume + landing_volume) * flights);

    let soffit = inclined.0 * width.0 + params.landing_length.0 * width.0;
    let sides = 2.0 * (inclined.0 * waist.0 + step_profile);
    q.add(MaterialKey::Formwork, (soffit + sides) * flights);

    let bar_run = inclined + params.landing_length;
    let main_bars = bars_at_spacing(width, params.main_bar_spacing);
    add_bars(&mut q, params.main_bar_dia, bar_run * f64::from(main_bars) * flights, constants);

    let dist_bars = bars_at_spacing(bar_run, params.dist_bar_spacing);
    add_bars(&mut q, params.dist_bar_dia, width * f64::from(dist_bars) * flights, constants);

    add_concrete(&mut q, wet, &params.mix_ratio, constants);
    q
}
