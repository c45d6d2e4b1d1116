//! Order Processing Core
//!
//! 两段式下单：先整单校验，再逐项提交。
//!
//! # Passes
//!
//! 1. **Validation**: resolve every cart item against one catalog snapshot;
//!    the whole cart is rejected on the first unresolvable id, insufficient
//!    stock, or malformed item. No side effects.
//! 2. **Commit**: deduct stock write-through (one catalog update per item,
//!    quantities computed against the validation snapshot), then append one
//!    ledger line per item under a single transaction id, with name/price
//!    snapshotted at validation time.
//!
//! Both passes run inside one mutex, so concurrent callers cannot interleave
//! between check and deduction; the "no overselling" invariant holds across
//! requests. Persistence failures inside the commit pass are logged and NOT
//! rolled back; the order still reports success (single-writer, small-file
//! trade-off inherited from the storage contract).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use shared::models::{CartItem, Product, ProductUpdate, SaleLine};

use crate::store::{CatalogStore, SaleLedger, StoreError};
use crate::utils::time;

#[cfg(test)]
mod tests;

/// Order processing errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Product ID {0} not found")]
    ProductNotFound(u32),

    #[error(
        "Insufficient stock for product {product_id} (requested {requested}, available {available})"
    )]
    InsufficientStock {
        product_id: u32,
        requested: u32,
        available: u32,
    },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid quantity for product {0}: must be at least 1")]
    InvalidQuantity(u32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a successfully processed order
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    /// Grouping key shared by every line of this order
    pub transaction_id: String,
    /// The ledger lines written for this order
    pub lines: Vec<SaleLine>,
}

/// The order processor: validates carts and commits them to catalog + ledger
pub struct OrderProcessor {
    catalog: Arc<CatalogStore>,
    ledger: Arc<SaleLedger>,
    /// 校验与提交必须整体互斥，否则并发下单可超卖
    lock: Mutex<()>,
}

impl OrderProcessor {
    pub fn new(catalog: Arc<CatalogStore>, ledger: Arc<SaleLedger>) -> Self {
        Self {
            catalog,
            ledger,
            lock: Mutex::new(()),
        }
    }

    /// Process one cart for `client`
    ///
    /// Either the whole cart goes through or nothing is deducted; see the
    /// module docs for the two-pass contract.
    pub fn process(&self, cart: &[CartItem], client: &str) -> Result<OrderReceipt, OrderError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        // ---- Validation pass: no side effects until the whole cart clears ----
        let snapshot = self.catalog.load_all()?;
        let by_id: HashMap<u32, &Product> = snapshot.iter().map(|p| (p.id, p)).collect();

        let mut validated: Vec<(Product, u32)> = Vec::with_capacity(cart.len());
        for item in cart {
            if item.quantity == 0 {
                return Err(OrderError::InvalidQuantity(item.product_id));
            }

            let product = *by_id
                .get(&item.product_id)
                .ok_or(OrderError::ProductNotFound(item.product_id))?;

            if item.quantity > product.quantity {
                return Err(OrderError::InsufficientStock {
                    product_id: product.id,
                    requested: item.quantity,
                    available: product.quantity,
                });
            }

            validated.push((product.clone(), item.quantity));
        }

        // ---- Commit pass: deduct write-through, then record the sale ----
        let transaction_id = new_transaction_id();
        let date = time::today();

        let mut lines: Vec<SaleLine> = Vec::with_capacity(validated.len());
        for (product, quantity) in &validated {
            let remaining = product.quantity - quantity;
            let update = ProductUpdate {
                name: product.name.clone(),
                price: product.price,
                quantity: remaining,
            };
            if let Err(e) = self.catalog.update(product.id, update) {
                // 不回滚：记录错误并继续 (见模块文档)
                tracing::error!(
                    product_id = product.id,
                    error = %e,
                    "Stock deduction failed during commit pass"
                );
            }

            let line_total = product.price * Decimal::from(*quantity);
            lines.push(SaleLine {
                date,
                transaction_id: transaction_id.clone(),
                product_id: product.id,
                product_name: product.name.clone(),
                unit_price: product.price,
                quantity: *quantity,
                line_total,
                client: client.to_string(),
            });

            tracing::info!(
                target: "sales",
                transaction_id = %transaction_id,
                product = %product.name,
                quantity,
                total = %line_total,
                client,
                "Sale line recorded"
            );
        }

        if let Err(e) = self.ledger.append_all(&lines) {
            // 库存已扣减；台账写入失败只记录，不回滚
            tracing::error!(
                transaction_id = %transaction_id,
                error = %e,
                "Failed to append sale lines to ledger"
            );
        }

        Ok(OrderReceipt {
            transaction_id,
            lines,
        })
    }
}

/// 8-character opaque transaction id (UUIDv4 prefix)
fn new_transaction_id() -> String {
    let mut id = Uuid::new_v4().to_string();
    id.truncate(8);
    id
}
