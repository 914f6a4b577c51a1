mod item_service_tests;

use crate::domain::{ItemId, Stock};

use super::ItemService;

pub(super) fn stock_with(items: &[(&str, f64, i64)]) -> (Stock, Vec<ItemId>) {
    let mut stock = Stock::new();
    let ids = items
        .iter()
        .map(|(name, price, quantity)| {
            ItemService::add_item(&mut stock, name, *price, *quantity).unwrap()
        })
        .collect();
    (stock, ids)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
