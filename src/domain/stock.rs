use serde::{Deserialize, Serialize};

use super::common::NamedEntity;
use super::item::{Item, ItemId};
use crate::errors::{Result, ValidationError};

/// In-memory stock in insertion order. Positions shown to the operator are
/// 1-based indexes into this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stock {
    items: Vec<Item>,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Resolves a 1-based listing position to the item's stable id.
    pub fn id_at(&self, position: usize) -> Result<ItemId> {
        position
            .checked_sub(1)
            .and_then(|idx| self.items.get(idx))
            .map(|item| item.id)
            .ok_or_else(|| ValidationError::InvalidItemId(position).into())
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .map(|idx| idx + 1)
    }

    /// Finds an item by case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.same_name(name))
    }

    /// Rejects `name` if another item (other than `exclude`) already uses it.
    pub(crate) fn ensure_unique_name(&self, name: &str, exclude: Option<ItemId>) -> Result<()> {
        let clash = self
            .items
            .iter()
            .any(|item| item.same_name(name) && exclude.map_or(true, |id| item.id != id));
        if clash {
            Err(ValidationError::DuplicateName(name.to_string()).into())
        } else {
            Ok(())
        }
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }
}
