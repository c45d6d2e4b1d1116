use super::*;

use shared::models::SaleLine;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn line(
    date: NaiveDate,
    tid: &str,
    product: &str,
    quantity: u32,
    total: Decimal,
    client: &str,
) -> SaleLine {
    SaleLine {
        date,
        transaction_id: tid.to_string(),
        product_id: 1,
        product_name: product.to_string(),
        unit_price: total / Decimal::from(quantity.max(1)),
        quantity,
        line_total: total,
        client: client.to_string(),
    }
}

fn aggregator(dir: &TempDir, lines: &[SaleLine]) -> StatsAggregator {
    let ledger = Arc::new(SaleLedger::new(dir.path().join("sales.csv")));
    ledger.append_all(lines).unwrap();
    StatsAggregator::new(ledger)
}

#[test]
fn empty_ledger_yields_zeroed_report() {
    let dir = TempDir::new().unwrap();
    let stats = aggregator(&dir, &[]);

    let report = stats.compute(date(2024, 1, 7)).unwrap();
    assert_eq!(report.total_revenue, Decimal::ZERO);
    assert_eq!(report.estimated_margin, Decimal::ZERO);
    assert_eq!(report.total_volume, 0);
    assert_eq!(report.daily_series.len(), 7);
    assert!(report.daily_series.iter().all(|d| d.revenue == Decimal::ZERO));
    assert!(report.top_products.is_empty());
}

#[test]
fn totals_and_margin_sum_every_line() {
    let dir = TempDir::new().unwrap();
    let d = date(2024, 1, 5);
    let stats = aggregator(
        &dir,
        &[
            line(d, "t1", "Widget", 3, Decimal::new(3000, 2), "Acme"),
            line(d, "t2", "Gadget", 2, Decimal::new(1000, 2), "Bob"),
        ],
    );

    let report = stats.compute(d).unwrap();
    assert_eq!(report.total_revenue, Decimal::new(4000, 2));
    // 40.00 * 0.30 = 12.00
    assert_eq!(report.estimated_margin, Decimal::from(12));
    assert_eq!(report.total_volume, 5);
}

#[test]
fn daily_series_covers_seven_days_ending_as_of() {
    let dir = TempDir::new().unwrap();
    let as_of = date(2024, 1, 10);
    let stats = aggregator(
        &dir,
        &[
            // inside the window
            line(date(2024, 1, 4), "t1", "W", 1, Decimal::from(10), "A"),
            line(date(2024, 1, 10), "t2", "W", 1, Decimal::from(7), "A"),
            line(date(2024, 1, 10), "t3", "W", 1, Decimal::from(3), "A"),
            // outside the window
            line(date(2024, 1, 3), "t4", "W", 1, Decimal::from(99), "A"),
        ],
    );

    let report = stats.compute(as_of).unwrap();
    let series = &report.daily_series;

    assert_eq!(series.len(), 7);
    assert_eq!(series.first().unwrap().date, date(2024, 1, 4));
    assert_eq!(series.last().unwrap().date, date(2024, 1, 10));

    assert_eq!(series[0].revenue, Decimal::from(10));
    assert_eq!(series[6].revenue, Decimal::from(10)); // 7 + 3
    // days without sales report zero
    assert!(series[1..6].iter().all(|d| d.revenue == Decimal::ZERO));
}

#[test]
fn top_products_ranked_by_quantity_with_stable_ties() {
    let dir = TempDir::new().unwrap();
    let d = date(2024, 1, 5);
    let stats = aggregator(
        &dir,
        &[
            line(d, "t1", "Bronze", 2, Decimal::from(2), "A"),
            line(d, "t2", "Gold", 9, Decimal::from(9), "A"),
            line(d, "t3", "Silver", 5, Decimal::from(5), "A"),
            // ties with Silver but encountered later
            line(d, "t4", "Tin", 5, Decimal::from(5), "A"),
            line(d, "t5", "Gold", 1, Decimal::from(1), "A"),
        ],
    );

    let report = stats.compute(d).unwrap();
    let names: Vec<&str> = report.top_products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Gold", "Silver", "Tin", "Bronze"]);
    assert_eq!(report.top_products[0].quantity, 10);
}

#[test]
fn top_products_keeps_at_most_five() {
    let dir = TempDir::new().unwrap();
    let d = date(2024, 1, 5);
    let lines: Vec<SaleLine> = (0..8)
        .map(|i| {
            line(
                d,
                &format!("t{i}"),
                &format!("P{i}"),
                i + 1,
                Decimal::from(i + 1),
                "A",
            )
        })
        .collect();
    let stats = aggregator(&dir, &lines);

    let report = stats.compute(d).unwrap();
    assert_eq!(report.top_products.len(), 5);
    assert_eq!(report.top_products[0].name, "P7");
}

#[test]
fn compute_is_idempotent_over_unchanged_ledger() {
    let dir = TempDir::new().unwrap();
    let d = date(2024, 1, 5);
    let stats = aggregator(
        &dir,
        &[
            line(d, "t1", "Widget", 3, Decimal::new(3000, 2), "Acme"),
            line(date(2024, 1, 2), "t2", "Gadget", 2, Decimal::new(1000, 2), "Bob"),
        ],
    );

    let first = stats.compute(d).unwrap();
    let second = stats.compute(d).unwrap();
    assert_eq!(first, second);

    let history_first = stats.grouped_history().unwrap();
    let history_second = stats.grouped_history().unwrap();
    assert_eq!(history_first, history_second);
}

#[test]
fn grouped_history_merges_lines_sharing_a_transaction() {
    let dir = TempDir::new().unwrap();
    let d = date(2024, 1, 1);
    let stats = aggregator(
        &dir,
        &[
            line(d, "abc123", "X", 1, Decimal::new(1000, 2), "Bob"),
            line(d, "abc123", "Y", 1, Decimal::new(500, 2), "Bob"),
        ],
    );

    let history = stats.grouped_history().unwrap();
    assert_eq!(history.len(), 1);

    let entry = &history[0];
    assert_eq!(entry.transaction_id, "abc123");
    assert_eq!(entry.date, d);
    assert_eq!(entry.client, "Bob");
    assert_eq!(entry.total, Decimal::new(1500, 2));
    assert_eq!(entry.items, "X (x1), Y (x1)");
}

#[test]
fn grouped_history_is_most_recent_first_with_reverse_insertion_ties() {
    let dir = TempDir::new().unwrap();
    let stats = aggregator(
        &dir,
        &[
            line(date(2024, 1, 1), "old", "X", 1, Decimal::from(1), "A"),
            line(date(2024, 1, 3), "first", "X", 1, Decimal::from(1), "A"),
            line(date(2024, 1, 3), "second", "X", 1, Decimal::from(1), "A"),
            line(date(2024, 1, 5), "newest", "X", 1, Decimal::from(1), "A"),
        ],
    );

    let history = stats.grouped_history().unwrap();
    let tids: Vec<&str> = history.iter().map(|h| h.transaction_id.as_str()).collect();

    // equal dates: last-appended group first
    assert_eq!(tids, vec!["newest", "second", "first", "old"]);
}

#[test]
fn margin_rate_constant_is_thirty_percent() {
    assert_eq!(ESTIMATED_MARGIN_RATE, Decimal::new(30, 2));
}
