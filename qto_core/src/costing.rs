//! # Cost Projection
//!
//! Multiplies aggregated quantities by an externally supplied price table.
//! Prices are never looked up here; the caller provides them.
//!
//! Every steel diameter is costed in the single `Steel (kg)` bucket.
//!
//! ## Price File (JSON)
//!
//! ```json
//! {
//!   "Cement (bags)": 540,
//!   "Sand (cft)": 45,
//!   "Aggregate (cft)": 160,
//!   "Steel (kg)": 95,
//!   "Total Bricks (Nos.)": 12
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{MaterialKey, MaterialQuantities};

/// Canonical priced material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CostBucket {
    #[serde(rename = "Cement (bags)")]
    Cement,
    #[serde(rename = "Sand (cft)")]
    Sand,
    #[serde(rename = "Aggregate (cft)")]
    Aggregate,
    #[serde(rename = "Steel (kg)")]
    Steel,
    #[serde(rename = "Total Bricks (Nos.)")]
    Bricks,
}

impl CostBucket {
    /// Every bucket in report order
    pub const ALL: [CostBucket; 5] = [
        CostBucket::Cement,
        CostBucket::Sand,
        CostBucket::Aggregate,
        CostBucket::Steel,
        CostBucket::Bricks,
    ];

    /// Price-table label
    pub fn label(&self) -> &'static str {
        match self {
            CostBucket::Cement => "Cement (bags)",
            CostBucket::Sand => "Sand (cft)",
            CostBucket::Aggregate => "Aggregate (cft)",
            CostBucket::Steel => "Steel (kg)",
            CostBucket::Bricks => "Total Bricks (Nos.)",
        }
    }

    /// Bucket a material line is costed in, if any
    pub fn for_key(key: &MaterialKey) -> Option<Self> {
        match key {
            MaterialKey::Cement => Some(CostBucket::Cement),
            MaterialKey::Sand => Some(CostBucket::Sand),
            MaterialKey::Aggregate => Some(CostBucket::Aggregate),
            MaterialKey::Steel(_) => Some(CostBucket::Steel),
            MaterialKey::TotalBricks => Some(CostBucket::Bricks),
            _ => None,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        CostBucket::ALL.into_iter().find(|b| b.label() == label.trim())
    }
}

impl fmt::Display for CostBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unit prices by bucket.
///
/// Reads and writes as a flat object keyed by bucket label.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "BTreeMap<String, f64>")]
pub struct PriceTable {
    prices: BTreeMap<CostBucket, f64>,
}

impl Serialize for PriceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.prices.serialize(serializer)
    }
}

impl From<BTreeMap<String, f64>> for PriceTable {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        let mut table = PriceTable::default();
        for (label, price) in raw {
            match CostBucket::from_label(&label) {
                Some(bucket) => table.set(bucket, price),
                None => log::warn!("Ignoring price for '{}': not a priced material", label),
            }
        }
        table
    }
}

impl PriceTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style price setter
    pub fn with_price(mut self, bucket: CostBucket, price: f64) -> Self {
        self.set(bucket, price);
        self
    }

    /// Set a unit price
    pub fn set(&mut self, bucket: CostBucket, price: f64) {
        self.prices.insert(bucket, price);
    }

    /// Unit price for a bucket
    pub fn get(&self, bucket: CostBucket) -> Option<f64> {
        self.prices.get(&bucket).copied()
    }

    /// Parse a JSON price table
    pub fn from_json_str(source: &str) -> CalcResult<Self> {
        let table: PriceTable = serde_json::from_str(source)?;
        table.validate()?;
        Ok(table)
    }

    /// Parse a TOML price table (labels must be quoted keys)
    pub fn from_toml_str(source: &str) -> CalcResult<Self> {
        let table: PriceTable = toml::from_str(source).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        table.validate()?;
        Ok(table)
    }

    /// Load a price table; `.toml` files are read as TOML, anything else as JSON
    pub fn load(path: &Path) -> CalcResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&source),
            _ => Self::from_json_str(&source),
        }
    }

    /// Prices must be finite and non-negative
    pub fn validate(&self) -> CalcResult<()> {
        for (bucket, price) in &self.prices {
            if !price.is_finite() || *price < 0.0 {
                return Err(CalcError::invalid_input(bucket.label(), price.to_string(), "Price must be a non-negative number"));
            }
        }
        Ok(())
    }
}

/// One costed bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub bucket: CostBucket,
    pub quantity: f64,
    pub unit_price: f64,
    pub amount: f64,
}

/// Cost of a set of material totals
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CostEstimate {
    /// Lines for every bucket that has both a quantity and a price
    pub lines: Vec<CostLine>,

    /// Sum of all line amounts
    pub total: f64,
}

/// Price the given totals.
///
/// ```rust
/// use qto_core::costing::{project_cost, CostBucket, PriceTable};
/// use qto_core::materials::{MaterialKey, MaterialQuantities};
///
/// let mut totals = MaterialQuantities::new();
/// totals.add(MaterialKey::Steel(10), 100.0);
/// totals.add(MaterialKey::Steel(16), 50.0);
///
/// let prices = PriceTable::new().with_price(CostBucket::Steel, 2.0);
/// let cost = project_cost(&totals, &prices);
/// assert_eq!(cost.total, 300.0);
/// ```
pub fn project_cost(totals: &MaterialQuantities, prices: &PriceTable) -> CostEstimate {
    let mut quantities: BTreeMap<CostBucket, f64> = BTreeMap::new();
    for (key, quantity) in totals.iter() {
        if let (Some(bucket), Some(amount)) = (CostBucket::for_key(key), quantity.as_amount()) {
            *quantities.entry(bucket).or_insert(0.0) += amount;
        }
    }

    let lines: Vec<CostLine> = quantities
        .into_iter()
        .filter_map(|(bucket, quantity)| {
            let unit_price = prices.get(bucket)?;
            let amount = round_money(quantity * unit_price);
            Some(CostLine {
                bucket,
                quantity: round_money(quantity),
                unit_price,
                amount,
            })
        })
        .collect();

    let total = round_money(lines.iter().map(|l| l.amount).sum());
    CostEstimate { lines, total }
}

fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
