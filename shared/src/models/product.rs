//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product ID type
pub type ProductId = u32;

/// Product model matching the catalog CSV schema
///
/// Invariant: `quantity` never goes negative; the order processor rejects
/// any cart that would underflow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Create product payload
///
/// The catalog assigns the id (`max(existing) + 1`, never reused).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Update product payload
///
/// Updates replace all three fields at once; there are no partial updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}
