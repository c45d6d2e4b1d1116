//! 端到端订单流程测试
//!
//! 使用 ServerState::initialize 完整初始化，覆盖
//! 建目录 → 建品 → 下单 → 台账 → 统计 的完整链路。

use rust_decimal::Decimal;
use tempfile::TempDir;

use shared::models::{CartItem, ProductCreate};
use stock_server::{Config, OrderError, ServerState};

fn test_state(dir: &TempDir) -> ServerState {
    let config = Config::with_overrides(dir.path(), 0);
    ServerState::initialize(&config).expect("state initialization")
}

fn product(name: &str, price: Decimal, quantity: u32) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        price,
        quantity,
    }
}

#[test]
fn full_order_flow_updates_catalog_ledger_and_stats() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let widget = state
        .catalog
        .add(product("Widget", Decimal::new(1000, 2), 5))
        .unwrap();
    let gadget = state
        .catalog
        .add(product("Gadget", Decimal::new(500, 2), 8))
        .unwrap();

    let receipt = state
        .orders
        .process(
            &[
                CartItem {
                    product_id: widget.id,
                    quantity: 3,
                },
                CartItem {
                    product_id: gadget.id,
                    quantity: 2,
                },
            ],
            "Acme",
        )
        .unwrap();

    // Catalog reflects the deduction
    assert_eq!(state.catalog.get(widget.id).unwrap().quantity, 2);
    assert_eq!(state.catalog.get(gadget.id).unwrap().quantity, 6);

    // Ledger carries one line per cart item under one transaction id
    let lines = state.ledger.load_all().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.transaction_id == receipt.transaction_id));

    // Stats see the revenue: 3 * 10.00 + 2 * 5.00 = 40.00
    let report = state.stats.compute(lines[0].date).unwrap();
    assert_eq!(report.total_revenue, Decimal::from(40));
    assert_eq!(report.total_volume, 5);
    assert_eq!(report.top_products.first().unwrap().name, "Widget");

    // History shows one grouped transaction
    let history = state.stats.grouped_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].client, "Acme");
    assert_eq!(history[0].total, Decimal::from(40));
    assert_eq!(history[0].items, "Widget (x3), Gadget (x2)");
}

#[test]
fn rejected_order_leaves_no_trace() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let widget = state
        .catalog
        .add(product("Widget", Decimal::new(1000, 2), 2))
        .unwrap();

    let err = state
        .orders
        .process(
            &[CartItem {
                product_id: widget.id,
                quantity: 5,
            }],
            "Acme",
        )
        .unwrap_err();
    assert!(matches!(err, OrderError::InsufficientStock { .. }));

    assert_eq!(state.catalog.get(widget.id).unwrap().quantity, 2);
    assert!(state.ledger.load_all().unwrap().is_empty());
    assert!(state.stats.grouped_history().unwrap().is_empty());
}

#[test]
fn state_reopens_existing_data_files() {
    let dir = TempDir::new().unwrap();

    {
        let state = test_state(&dir);
        state
            .catalog
            .add(product("Widget", Decimal::new(1000, 2), 5))
            .unwrap();
    }

    // A fresh state over the same work dir sees the persisted catalog
    let reopened = test_state(&dir);
    let products = reopened.catalog.list().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Widget");
}
