use serde::{Deserialize, Serialize};

use super::item::ItemId;

/// One requested line of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Insertion-ordered map from item to requested quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    lines: Vec<PurchaseLine>,
}

impl Purchase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity for `item_id`. Re-setting an item replaces its
    /// quantity but keeps its original position.
    pub fn set(&mut self, item_id: ItemId, quantity: u32) {
        match self.lines.iter_mut().find(|line| line.item_id == item_id) {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(PurchaseLine { item_id, quantity }),
        }
    }

    pub fn with(mut self, item_id: ItemId, quantity: u32) -> Self {
        self.set(item_id, quantity);
        self
    }

    pub fn quantity(&self, item_id: ItemId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.item_id == item_id)
            .map(|line| line.quantity)
    }

    pub fn lines(&self) -> &[PurchaseLine] {
        &self.lines
    }

    /// Number of distinct items purchased.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
