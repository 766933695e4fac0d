// src/data/record.rs
use serde::Deserialize;

/// One sales transaction from the superstore dataset. Parsed once at load
/// time; immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    /// Discount as a 0-1 fraction.
    #[serde(rename = "Discount")]
    pub discount: f64,
    /// Signed currency; losses are negative.
    #[serde(rename = "Profit")]
    pub profit: f64,
}

impl Record {
    /// A row is usable only if every numeric column parsed to a finite
    /// value. "NaN" in the source text deserializes without error, so this
    /// check is what keeps not-a-number out of the aggregates.
    pub fn is_well_formed(&self) -> bool {
        self.sales.is_finite()
            && self.quantity.is_finite()
            && self.discount.is_finite()
            && self.profit.is_finite()
    }
}
