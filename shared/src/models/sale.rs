//! Sale Ledger Models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::ProductId;

/// One line of the sales ledger
///
/// Immutable once written. Lines created from the same cart share a
/// `transaction_id`; `product_name` and `unit_price` are snapshots taken
/// at validation time, so later catalog edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    pub date: NaiveDate,
    #[serde(rename = "tid")]
    pub transaction_id: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
    pub client: String,
}

/// Transient cart entry; exists only for the duration of one order call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}
