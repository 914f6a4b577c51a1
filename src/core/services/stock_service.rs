use crate::domain::{ItemId, Purchase, Stock};
use crate::errors::ValidationError;

use super::ServiceResult;

/// An item whose quantity fell below zero after a purchase was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
}

pub struct StockService;

impl StockService {
    /// Decrements each purchased item by its purchased quantity.
    ///
    /// Overdrawing is allowed and the quantity goes negative; the affected
    /// items are returned so the caller can flag them. Unknown ids are
    /// rejected before anything is changed.
    pub fn update_stock(stock: &mut Stock, purchase: &Purchase) -> ServiceResult<Vec<Shortfall>> {
        if let Some(missing) = purchase
            .lines()
            .iter()
            .find(|line| stock.item(line.item_id).is_none())
        {
            return Err(ValidationError::UnknownItem(missing.item_id).into());
        }

        let mut shortfalls = Vec::new();
        for line in purchase.lines() {
            let Some(item) = stock.item_mut(line.item_id) else {
                continue;
            };
            item.quantity -= i64::from(line.quantity);
            if item.quantity < 0 {
                tracing::warn!(
                    id = %item.id,
                    name = %item.name,
                    quantity = item.quantity,
                    "stock overdrawn by purchase"
                );
                shortfalls.push(Shortfall {
                    item_id: item.id,
                    name: item.name.clone(),
                    quantity: item.quantity,
                });
            }
        }
        Ok(shortfalls)
    }
}
