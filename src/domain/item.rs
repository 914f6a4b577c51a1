use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::NamedEntity;

/// Stable key for a stock item, independent of its listing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product held in stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    /// Signed because purchases are allowed to overdraw stock.
    pub quantity: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            price,
            quantity,
        }
    }
}

impl NamedEntity for Item {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Editable item fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Price,
    Quantity,
}

impl ItemField {
    pub fn label(self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Price => "price",
            ItemField::Quantity => "quantity",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_get_distinct_ids() {
        let a = Item::new("Rice", 100.0, 3);
        let b = Item::new("Rice", 100.0, 3);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn name_match_ignores_case() {
        let item = Item::new("Palm Oil", 950.0, 2);
        assert!(item.same_name("palm oil"));
        assert!(item.same_name("PALM OIL "));
        assert!(!item.same_name("palm"));
    }
}
