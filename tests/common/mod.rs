use retail_core::core::services::ItemService;
use retail_core::domain::{ItemId, Stock};

/// Builds a stock from `(name, price, quantity)` rows, returning ids in order.
pub fn stock_with(rows: &[(&str, f64, i64)]) -> (Stock, Vec<ItemId>) {
    let mut stock = Stock::new();
    let ids = rows
        .iter()
        .map(|(name, price, quantity)| {
            ItemService::add_item(&mut stock, name, *price, *quantity).expect("valid item")
        })
        .collect();
    (stock, ids)
}
