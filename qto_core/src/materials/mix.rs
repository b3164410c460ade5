//! Mix ratios (cement:sand:aggregate by volume)
//!
//! A ratio is written as colon-separated parts: `"1:2:4"` for concrete or
//! `"1:4"` for mortar. Two parts is valid and simply has no aggregate share.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::errors::{CalcError, CalcResult};

/// Volumetric mix proportion.
///
/// The default ratio is empty: its sum is zero, which every calculator
/// treats as "no concrete/mortar quantities".
///
/// ```rust
/// use qto_core::materials::MixRatio;
///
/// let ratio = MixRatio::parse("1:1.5:3").unwrap();
/// assert_eq!(ratio.sum(), 5.5);
/// assert_eq!(ratio.aggregate(), Some(3.0));
///
/// let mortar = MixRatio::parse("1:4").unwrap();
/// assert_eq!(mortar.aggregate(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MixRatio {
    parts: Vec<f64>,
}

impl MixRatio {
    /// Parse a colon-delimited ratio strictly.
    pub fn parse(source: &str) -> CalcResult<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(CalcError::missing_field("mixRatio"));
        }

        let parts = trimmed
            .split(':')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or_else(|| {
                        CalcError::invalid_input("mixRatio", source, format!("'{}' is not a non-negative number", part.trim()))
                    })
            })
            .collect::<CalcResult<Vec<f64>>>()?;

        if !(2..=3).contains(&parts.len()) {
            return Err(CalcError::invalid_input(
                "mixRatio",
                source,
                "Expected cement:sand or cement:sand:aggregate",
            ));
        }

        Ok(MixRatio { parts })
    }

    /// Ratio with no parts (sum zero)
    pub fn none() -> Self {
        MixRatio::default()
    }

    /// Sum of all parts
    pub fn sum(&self) -> f64 {
        self.parts.iter().sum()
    }

    /// True when the ratio can be used to split a volume
    pub fn is_usable(&self) -> bool {
        self.sum() > 0.0
    }

    /// Cement share
    pub fn cement(&self) -> f64 {
        self.parts.first().copied().unwrap_or(0.0)
    }

    /// Sand share
    pub fn sand(&self) -> f64 {
        self.parts.get(1).copied().unwrap_or(0.0)
    }

    /// Aggregate share, present only for three-part ratios
    pub fn aggregate(&self) -> Option<f64> {
        self.parts.get(2).copied()
    }
}

impl FromStr for MixRatio {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MixRatio::parse(s)
    }
}

impl fmt::Display for MixRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.parts.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", text.join(":"))
    }
}

impl Serialize for MixRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MixRatio {
    /// Lenient: a bad or absent ratio becomes the empty ratio.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let ratio = match &value {
            Value::Null => MixRatio::none(),
            Value::String(s) if s.trim().is_empty() => MixRatio::none(),
            Value::String(s) => MixRatio::parse(s).unwrap_or_else(|e| {
                log::warn!("Ignoring mix ratio: {}", e);
                MixRatio::none()
            }),
            other => {
                log::warn!("Ignoring mix ratio: expected a string like \"1:2:4\", got {}", other);
                MixRatio::none()
            }
        };
        Ok(ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_concrete_ratio() {
        let r = MixRatio::parse("1:2:4").unwrap();
        assert_eq!(r.cement(), 1.0);
        assert_eq!(r.sand(), 2.0);
        assert_eq!(r.aggregate(), Some(4.0));
        assert_eq!(r.sum(), 7.0);
    }

    #[test]
    fn test_parse_with_spaces() {
        let r = MixRatio::parse(" 1 : 1.5 : 3 ").unwrap();
        assert_eq!(r.sum(), 5.5);
    }

    #[test]
    fn test_parse_errors() {
        assert!(MixRatio::parse("").is_err());
        assert!(MixRatio::parse("1").is_err());
        assert!(MixRatio::parse("1:x:4").is_err());
        assert!(MixRatio::parse("1:2:4:8").is_err());
        assert!(MixRatio::parse("1:-2").is_err());
    }

    #[test]
    fn test_lenient_deserialize() {
        let good: MixRatio = serde_json::from_str("\"1:4\"").unwrap();
        assert_eq!(good.sum(), 5.0);
        let bad: MixRatio = serde_json::from_str("\"one:two\"").unwrap();
        assert!(!bad.is_usable());
        let missing: MixRatio = serde_json::from_str("null").unwrap();
        assert_eq!(missing, MixRatio::none());
        let number: MixRatio = serde_json::from_str("7").unwrap();
        assert!(!number.is_usable());
    }

    #[test]
    fn test_display_roundtrip() {
        let r = MixRatio::parse("1:1.5:3").unwrap();
        assert_eq!(r.to_string(), "1:1.5:3");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"1:1.5:3\"");
    }
}
