use super::*;

use rust_decimal::Decimal;
use shared::models::ProductCreate;
use tempfile::TempDir;

fn setup(dir: &TempDir) -> (Arc<CatalogStore>, Arc<SaleLedger>, OrderProcessor) {
    let catalog = Arc::new(CatalogStore::new(dir.path().join("inventory.csv")));
    let ledger = Arc::new(SaleLedger::new(dir.path().join("sales.csv")));
    let processor = OrderProcessor::new(catalog.clone(), ledger.clone());
    (catalog, ledger, processor)
}

fn add_product(catalog: &CatalogStore, name: &str, price: Decimal, quantity: u32) -> u32 {
    catalog
        .add(ProductCreate {
            name: name.to_string(),
            price,
            quantity,
        })
        .unwrap()
        .id
}

fn item(product_id: u32, quantity: u32) -> CartItem {
    CartItem {
        product_id,
        quantity,
    }
}

#[test]
fn successful_order_deducts_stock_and_records_one_line_per_item() {
    let dir = TempDir::new().unwrap();
    let (catalog, ledger, processor) = setup(&dir);

    let widget = add_product(&catalog, "Widget", Decimal::new(1000, 2), 5);

    let receipt = processor.process(&[item(widget, 3)], "Acme").unwrap();

    // Catalog: 5 - 3 = 2
    assert_eq!(catalog.get(widget).unwrap().quantity, 2);

    // Ledger: exactly one line, with the snapshot price and computed total
    let lines = ledger.load_all().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_id, widget);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(lines[0].line_total, Decimal::new(3000, 2));
    assert_eq!(lines[0].client, "Acme");
    assert_eq!(lines[0].transaction_id, receipt.transaction_id);
}

#[test]
fn all_lines_of_one_cart_share_a_transaction_id() {
    let dir = TempDir::new().unwrap();
    let (catalog, ledger, processor) = setup(&dir);

    let a = add_product(&catalog, "A", Decimal::new(100, 2), 10);
    let b = add_product(&catalog, "B", Decimal::new(200, 2), 10);

    let receipt = processor
        .process(&[item(a, 2), item(b, 4)], "Acme")
        .unwrap();

    let lines = ledger.load_all().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.transaction_id == receipt.transaction_id));

    assert_eq!(catalog.get(a).unwrap().quantity, 8);
    assert_eq!(catalog.get(b).unwrap().quantity, 6);
}

#[test]
fn insufficient_stock_rejects_whole_cart_without_deduction() {
    let dir = TempDir::new().unwrap();
    let (catalog, ledger, processor) = setup(&dir);

    let widget = add_product(&catalog, "Widget", Decimal::new(1000, 2), 2);

    let err = processor.process(&[item(widget, 5)], "Acme").unwrap_err();
    match err {
        OrderError::InsufficientStock {
            product_id,
            requested,
            available,
        } => {
            assert_eq!(product_id, widget);
            assert_eq!(requested, 5);
            assert_eq!(available, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(catalog.get(widget).unwrap().quantity, 2);
    assert!(ledger.load_all().unwrap().is_empty());
}

#[test]
fn one_bad_item_rejects_the_valid_ones_too() {
    let dir = TempDir::new().unwrap();
    let (catalog, ledger, processor) = setup(&dir);

    let ok = add_product(&catalog, "OK", Decimal::new(100, 2), 10);
    let scarce = add_product(&catalog, "Scarce", Decimal::new(100, 2), 1);

    // Second item fails validation, so the first must not be applied
    let err = processor
        .process(&[item(ok, 3), item(scarce, 2)], "Acme")
        .unwrap_err();
    assert!(matches!(err, OrderError::InsufficientStock { .. }));

    assert_eq!(catalog.get(ok).unwrap().quantity, 10);
    assert_eq!(catalog.get(scarce).unwrap().quantity, 1);
    assert!(ledger.load_all().unwrap().is_empty());
}

#[test]
fn unknown_product_fails_with_not_found_and_no_writes() {
    let dir = TempDir::new().unwrap();
    let (catalog, ledger, processor) = setup(&dir);

    let widget = add_product(&catalog, "Widget", Decimal::new(1000, 2), 5);

    let err = processor
        .process(&[item(widget, 1), item(999, 1)], "Acme")
        .unwrap_err();
    assert!(matches!(err, OrderError::ProductNotFound(999)));

    assert_eq!(catalog.get(widget).unwrap().quantity, 5);
    assert!(ledger.load_all().unwrap().is_empty());
}

#[test]
fn empty_cart_and_zero_quantity_are_malformed() {
    let dir = TempDir::new().unwrap();
    let (catalog, _ledger, processor) = setup(&dir);

    let widget = add_product(&catalog, "Widget", Decimal::new(1000, 2), 5);

    assert!(matches!(processor.process(&[], "Acme"), Err(OrderError::EmptyCart)));
    assert!(matches!(
        processor.process(&[item(widget, 0)], "Acme"),
        Err(OrderError::InvalidQuantity(_))
    ));
    assert_eq!(catalog.get(widget).unwrap().quantity, 5);
}

#[test]
fn ledger_snapshots_survive_later_catalog_edits() {
    let dir = TempDir::new().unwrap();
    let (catalog, ledger, processor) = setup(&dir);

    let widget = add_product(&catalog, "Widget", Decimal::new(1000, 2), 5);
    processor.process(&[item(widget, 1)], "Acme").unwrap();

    // Rename and reprice the product after the sale
    catalog
        .update(
            widget,
            shared::models::ProductUpdate {
                name: "Widget 2000".to_string(),
                price: Decimal::new(9999, 2),
                quantity: 4,
            },
        )
        .unwrap();

    let lines = ledger.load_all().unwrap();
    assert_eq!(lines[0].product_name, "Widget");
    assert_eq!(lines[0].unit_price, Decimal::new(1000, 2));
}

#[test]
fn transaction_ids_are_eight_chars_and_distinct_per_order() {
    let dir = TempDir::new().unwrap();
    let (catalog, _ledger, processor) = setup(&dir);

    let widget = add_product(&catalog, "Widget", Decimal::new(1000, 2), 10);

    let first = processor.process(&[item(widget, 1)], "A").unwrap();
    let second = processor.process(&[item(widget, 1)], "B").unwrap();

    assert_eq!(first.transaction_id.len(), 8);
    assert_eq!(second.transaction_id.len(), 8);
    assert_ne!(first.transaction_id, second.transaction_id);
}
