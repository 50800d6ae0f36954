//! Sale total computation.
//!
//! Quantities, prices, and the service fee arrive from clients as JSON
//! numbers or numeric strings; anything that does not parse counts as
//! zero instead of rejecting the sale. The companion app has always
//! relied on this, so the leniency is part of the wire contract.

use serde::{Deserialize, Deserializer};

use crate::types::DbId;

/// One cart line as submitted at checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleItemInput {
    pub product_id: DbId,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
}

impl SaleItemInput {
    /// Line subtotal: quantity x unit price.
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.price
    }
}

/// Total amount for a sale: service fee plus the sum of line subtotals.
pub fn compute_total(service_fee: f64, items: &[SaleItemInput]) -> f64 {
    service_fee + items.iter().map(SaleItemInput::subtotal).sum::<f64>()
}

/// Deserialize a JSON number, a numeric string, or anything else as `f64`,
/// coercing unparseable values to `0.0`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// Numeric coercion used for checkout amounts.
pub fn coerce_f64(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
