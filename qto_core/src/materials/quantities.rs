//! Material quantities produced by the calculators
//!
//! Internally quantities are keyed by [`MaterialKey`], a structured key that
//! carries the bar diameter for steel. Display strings such as
//! `"Steel 16mm (kg)"` are produced only when serializing, so aggregation
//! never has to pattern-match on text.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::constants::is_standard_bar;
use crate::equations::geometry::ceil_whole;
use crate::errors::CalcError;

/// Material line item.
///
/// Variant order is the display order of a quantities table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaterialKey {
    /// Wet (as-poured) concrete volume
    ConcreteVolume,
    /// Dry volume of concrete constituents
    DryVolume,
    /// Cement in 50 kg bags
    Cement,
    /// Sand volume
    Sand,
    /// Coarse aggregate volume
    Aggregate,
    /// Bricks broken down to khoa when aggregate is brick chips
    KhoaBricks,
    /// Reinforcement steel for one bar diameter (mm)
    Steel(u32),
    /// Formwork (shuttering) contact area
    Formwork,
    /// Column ties
    Ties,
    /// Beam stirrups
    Stirrups,
    /// Bricks for masonry
    TotalBricks,
    /// Excavation volume
    Earthwork,
    /// Externally supplied annotation passed through untouched
    Note(String),
}

/// How a material's total is rounded for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Whole units, rounded up (bags, bricks, bar pieces)
    Ceiling,
    /// Two decimal places (volumes, areas, weights)
    Hundredths,
}

impl Rounding {
    /// Apply this rounding to a value
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Ceiling => ceil_whole(value),
            Rounding::Hundredths => (value * 100.0).round() / 100.0,
        }
    }
}

impl MaterialKey {
    /// Rounding discipline for this material
    pub fn rounding(&self) -> Rounding {
        match self {
            MaterialKey::Cement
            | MaterialKey::KhoaBricks
            | MaterialKey::Ties
            | MaterialKey::Stirrups
            | MaterialKey::TotalBricks => Rounding::Ceiling,
            _ => Rounding::Hundredths,
        }
    }

    /// Steel key for a bar diameter, warning on non-standard sizes
    pub fn steel(diameter_mm: u32) -> Self {
        if !is_standard_bar(diameter_mm) {
            log::warn!("Bar diameter {}mm is not a standard size", diameter_mm);
        }
        MaterialKey::Steel(diameter_mm)
    }
}

impl fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialKey::ConcreteVolume => write!(f, "Concrete (cft)"),
            MaterialKey::DryVolume => write!(f, "Dry Volume (cft)"),
            MaterialKey::Cement => write!(f, "Cement (bags)"),
            MaterialKey::Sand => write!(f, "Sand (cft)"),
            MaterialKey::Aggregate => write!(f, "Aggregate (cft)"),
            MaterialKey::KhoaBricks => write!(f, "Bricks for Khoa (Nos.)"),
            MaterialKey::Steel(d) => write!(f, "Steel {}mm (kg)", d),
            MaterialKey::Formwork => write!(f, "Formwork (sft)"),
            MaterialKey::Ties => write!(f, "Ties (Nos.)"),
            MaterialKey::Stirrups => write!(f, "Stirrups (Nos.)"),
            MaterialKey::TotalBricks => write!(f, "Total Bricks (Nos.)"),
            MaterialKey::Earthwork => write!(f, "Earthwork (cft)"),
            MaterialKey::Note(label) => write!(f, "{}", label),
        }
    }
}

impl FromStr for MaterialKey {
    type Err = CalcError;

    /// Parse a display key back into a structured key. Unrecognized labels
    /// become notes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Concrete (cft)" => MaterialKey::ConcreteVolume,
            "Dry Volume (cft)" => MaterialKey::DryVolume,
            "Cement (bags)" => MaterialKey::Cement,
            "Sand (cft)" => MaterialKey::Sand,
            "Aggregate (cft)" => MaterialKey::Aggregate,
            "Bricks for Khoa (Nos.)" => MaterialKey::KhoaBricks,
            "Formwork (sft)" => MaterialKey::Formwork,
            "Ties (Nos.)" => MaterialKey::Ties,
            "Stirrups (Nos.)" => MaterialKey::Stirrups,
            "Total Bricks (Nos.)" => MaterialKey::TotalBricks,
            "Earthwork (cft)" => MaterialKey::Earthwork,
            other => match other
                .strip_prefix("Steel ")
                .and_then(|rest| rest.strip_suffix("mm (kg)"))
            {
                Some(dia) => MaterialKey::Steel(dia.trim().parse().map_err(|_| {
                    CalcError::invalid_input("material", other, "Steel key must carry a whole mm diameter")
                })?),
                None if other.trim().is_empty() => return Err(CalcError::missing_field("material")),
                None => MaterialKey::Note(other.to_string()),
            },
        };
        Ok(key)
    }
}

/// A single material amount, or a pass-through annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Numeric quantity in the unit named by the key
    Amount(f64),
    /// Descriptive value (e.g. an estimated duration) never touched by arithmetic
    Note(Value),
}

impl Quantity {
    /// Numeric value, if this is an amount
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            Quantity::Amount(v) => Some(*v),
            Quantity::Note(_) => None,
        }
    }
}

/// Ordered mapping of material -> quantity.
///
/// Serializes as a JSON object keyed by display strings:
///
/// ```json
/// { "Concrete (cft)": 10.0, "Cement (bags)": 2.0, "Steel 16mm (kg)": 19.21 }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialQuantities {
    entries: BTreeMap<MaterialKey, Quantity>,
}

impl MaterialQuantities {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no material was produced
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of line items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Add to a numeric quantity, creating it if absent.
    ///
    /// Adding to a key that holds a note leaves the note in place.
    pub fn add(&mut self, key: MaterialKey, amount: f64) {
        match self.entries.get_mut(&key) {
            Some(Quantity::Amount(existing)) => *existing += amount,
            Some(Quantity::Note(_)) => {}
            None => {
                self.entries.insert(key, Quantity::Amount(amount));
            }
        }
    }

    /// Record a pass-through note. The first value seen for a key wins.
    pub fn note(&mut self, key: MaterialKey, value: Value) {
        self.entries.entry(key).or_insert(Quantity::Note(value));
    }

    /// Fold another mapping into this one: amounts are summed, the first
    /// note for a key is kept and later ones are ignored.
    pub fn merge(&mut self, other: &MaterialQuantities) {
        for (key, quantity) in &other.entries {
            match quantity {
                Quantity::Amount(v) => self.add(key.clone(), *v),
                Quantity::Note(v) => self.note(key.clone(), v.clone()),
            }
        }
    }

    /// Copy with every amount rounded per [`MaterialKey::rounding`]. Notes
    /// are untouched.
    pub fn rounded(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(key, quantity)| {
                let q = match quantity {
                    Quantity::Amount(v) => Quantity::Amount(key.rounding().apply(*v)),
                    note => note.clone(),
                };
                (key.clone(), q)
            })
            .collect();
        MaterialQuantities { entries }
    }

    /// Look up a quantity by structured key
    pub fn get(&self, key: &MaterialKey) -> Option<&Quantity> {
        self.entries.get(key)
    }

    /// Numeric amount for a key, zero if absent or a note
    pub fn amount(&self, key: &MaterialKey) -> f64 {
        self.get(key).and_then(Quantity::as_amount).unwrap_or(0.0)
    }

    /// Look up a quantity by its display string (e.g. `"Sand (cft)"`)
    pub fn get_by_label(&self, label: &str) -> Option<&Quantity> {
        label.parse::<MaterialKey>().ok().and_then(|key| self.entries.get(&key))
    }

    /// Steel weight per bar diameter, smallest first
    pub fn steel(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().filter_map(|(key, q)| match (key, q) {
            (MaterialKey::Steel(d), Quantity::Amount(kg)) => Some((*d, *kg)),
            _ => None,
        })
    }

    /// Total steel weight across all diameters
    pub fn steel_total_kg(&self) -> f64 {
        self.steel().map(|(_, kg)| kg).sum()
    }

    /// Iterate over all line items in display order
    pub fn iter(&self) -> impl Iterator<Item = (&MaterialKey, &Quantity)> {
        self.entries.iter()
    }
}

impl Serialize for MaterialQuantities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, quantity) in &self.entries {
            map.serialize_entry(&key.to_string(), quantity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_keys() {
        assert_eq!(MaterialKey::Cement.to_string(), "Cement (bags)");
        assert_eq!(MaterialKey::Steel(20).to_string(), "Steel 20mm (kg)");
        assert_eq!(MaterialKey::TotalBricks.to_string(), "Total Bricks (Nos.)");
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("Steel 16mm (kg)".parse::<MaterialKey>().unwrap(), MaterialKey::Steel(16));
        assert_eq!("Sand (cft)".parse::<MaterialKey>().unwrap(), MaterialKey::Sand);
        assert_eq!(
            "Estimated Time".parse::<MaterialKey>().unwrap(),
            MaterialKey::Note("Estimated Time".to_string())
        );
        assert!("Steel xmm (kg)".parse::<MaterialKey>().is_err());
    }

    #[test]
    fn test_same_diameter_sums() {
        let mut q = MaterialQuantities::new();
        q.add(MaterialKey::Steel(16), 10.0);
        q.add(MaterialKey::Steel(16), 5.5);
        q.add(MaterialKey::Steel(10), 2.0);
        assert_eq!(q.amount(&MaterialKey::Steel(16)), 15.5);
        assert_eq!(q.steel().collect::<Vec<_>>(), vec![(10, 2.0), (16, 15.5)]);
        assert_eq!(q.steel_total_kg(), 17.5);
    }

    #[test]
    fn test_merge_keeps_first_note() {
        let mut a = MaterialQuantities::new();
        a.note(MaterialKey::Note("Estimated Time".into()), json!("3 days"));
        a.add(MaterialKey::Earthwork, 100.0);

        let mut b = MaterialQuantities::new();
        b.note(MaterialKey::Note("Estimated Time".into()), json!("9 days"));
        b.add(MaterialKey::Earthwork, 50.0);

        a.merge(&b);
        assert_eq!(a.amount(&MaterialKey::Earthwork), 150.0);
        assert_eq!(
            a.get_by_label("Estimated Time"),
            Some(&Quantity::Note(json!("3 days")))
        );
    }

    #[test]
    fn test_rounding_discipline() {
        let mut q = MaterialQuantities::new();
        q.add(MaterialKey::Cement, 1.76);
        q.add(MaterialKey::Sand, 4.4004);
        q.add(MaterialKey::Steel(12), 3.14159);
        q.add(MaterialKey::TotalBricks, 100.2);
        let r = q.rounded();
        assert_eq!(r.amount(&MaterialKey::Cement), 2.0);
        assert_eq!(r.amount(&MaterialKey::Sand), 4.4);
        assert_eq!(r.amount(&MaterialKey::Steel(12)), 3.14);
        assert_eq!(r.amount(&MaterialKey::TotalBricks), 101.0);
    }

    #[test]
    fn test_serialization_uses_display_keys() {
        let mut q = MaterialQuantities::new();
        q.add(MaterialKey::Steel(16), 1.5);
        q.note(MaterialKey::Note("Manpower".into()), json!(4));
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value, json!({ "Steel 16mm (kg)": 1.5, "Manpower": 4 }));
    }
}
