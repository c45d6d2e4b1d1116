//! Statistics Aggregator
//!
//! Single-scan rollups over the sale ledger: total revenue, estimated
//! margin, volume, a seven-day revenue series, top products, and the
//! transaction-grouped sales history.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::store::{SaleLedger, StoreResult};

#[cfg(test)]
mod tests;

/// 估算毛利率：营收的固定 30% (业务约定值，非计算值)
pub const ESTIMATED_MARGIN_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// 营收曲线窗口：最近 7 个自然日 (含当日)
pub const REVENUE_WINDOW_DAYS: i64 = 7;

/// How many products the top-seller list carries
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Revenue for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: Decimal,
}

/// One entry of the top-sellers list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    pub name: String,
    pub quantity: u64,
}

/// Aggregate statistics over the whole ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub total_revenue: Decimal,
    pub estimated_margin: Decimal,
    pub total_volume: u64,
    /// Oldest to newest; always exactly [`REVENUE_WINDOW_DAYS`] entries
    pub daily_series: Vec<DailyRevenue>,
    /// Descending by quantity, at most [`TOP_PRODUCTS_LIMIT`] entries
    pub top_products: Vec<TopProduct>,
}

/// One cart's worth of sale lines, grouped for the history view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    #[serde(rename = "tid")]
    pub transaction_id: String,
    pub date: NaiveDate,
    pub client: String,
    pub total: Decimal,
    /// Human-readable "Name (xQty), ..." concatenation
    pub items: String,
}

/// Ledger-scanning statistics service
#[derive(Debug)]
pub struct StatsAggregator {
    ledger: Arc<SaleLedger>,
}

impl StatsAggregator {
    pub fn new(ledger: Arc<SaleLedger>) -> Self {
        Self { ledger }
    }

    /// Compute the aggregate report as of the given date
    ///
    /// Idempotent: two calls over an unchanged ledger return identical
    /// reports.
    pub fn compute(&self, as_of: NaiveDate) -> StoreResult<StatsReport> {
        let lines = self.ledger.load_all()?;

        let mut total_revenue = Decimal::ZERO;
        let mut total_volume: u64 = 0;
        // first-encounter order, so equal quantities keep a stable ranking
        let mut by_product: Vec<(String, u64)> = Vec::new();
        let mut by_day: HashMap<NaiveDate, Decimal> = HashMap::new();

        for line in &lines {
            total_revenue += line.line_total;
            total_volume += u64::from(line.quantity);

            match by_product.iter_mut().find(|(name, _)| name == &line.product_name) {
                Some((_, quantity)) => *quantity += u64::from(line.quantity),
                None => by_product.push((line.product_name.clone(), u64::from(line.quantity))),
            }

            *by_day.entry(line.date).or_insert(Decimal::ZERO) += line.line_total;
        }

        let daily_series = (0..REVENUE_WINDOW_DAYS)
            .rev()
            .map(|offset| {
                let date = as_of - Duration::days(offset);
                DailyRevenue {
                    date,
                    revenue: by_day.get(&date).copied().unwrap_or(Decimal::ZERO),
                }
            })
            .collect();

        // stable sort: ties stay in first-encounter order
        by_product.sort_by(|a, b| b.1.cmp(&a.1));
        let top_products = by_product
            .into_iter()
            .take(TOP_PRODUCTS_LIMIT)
            .map(|(name, quantity)| TopProduct { name, quantity })
            .collect();

        Ok(StatsReport {
            total_revenue,
            estimated_margin: total_revenue * ESTIMATED_MARGIN_RATE,
            total_volume,
            daily_series,
            top_products,
        })
    }

    /// Sales history grouped by transaction id
    ///
    /// Most recent first; groups sharing a date come out last-appended
    /// first.
    pub fn grouped_history(&self) -> StoreResult<Vec<TransactionSummary>> {
        let lines = self.ledger.load_all()?;

        struct Group {
            date: NaiveDate,
            client: String,
            total: Decimal,
            items: Vec<String>,
        }

        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Group> = HashMap::new();

        for line in &lines {
            let group = groups
                .entry(line.transaction_id.clone())
                .or_insert_with(|| {
                    order.push(line.transaction_id.clone());
                    Group {
                        date: line.date,
                        client: line.client.clone(),
                        total: Decimal::ZERO,
                        items: Vec::new(),
                    }
                });
            group.date = line.date;
            group.client = line.client.clone();
            group.total += line.line_total;
            group
                .items
                .push(format!("{} (x{})", line.product_name, line.quantity));
        }

        let mut history: Vec<TransactionSummary> = order
            .into_iter()
            .filter_map(|tid| {
                groups.remove(&tid).map(|g| TransactionSummary {
                    transaction_id: tid,
                    date: g.date,
                    client: g.client,
                    total: g.total,
                    items: g.items.join(", "),
                })
            })
            .collect();

        // last-appended first among equal dates, then stable sort by date
        history.reverse();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(history)
    }
}
