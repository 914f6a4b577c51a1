use crate::domain::{Item, ItemField, ItemId, Stock};
use crate::errors::{StockError, ValidationError};

use super::ServiceResult;

/// Adds and edits stock items. Every operation validates fully before touching
/// the stock, so a rejected call leaves it unchanged.
pub struct ItemService;

impl ItemService {
    /// Appends a new item and returns its id.
    pub fn add_item(
        stock: &mut Stock,
        name: &str,
        price: f64,
        quantity: i64,
    ) -> ServiceResult<ItemId> {
        let name = Self::validate_name(name)?;
        Self::validate_price(price)?;
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity.into());
        }
        stock.ensure_unique_name(name, None)?;

        let item = Item::new(name, price, quantity);
        let id = item.id;
        tracing::debug!(%id, name, price, quantity, "item added");
        stock.push(item);
        Ok(id)
    }

    /// Changes one field of the item at the 1-based `position` from raw
    /// operator text. Returns the item's (possibly new) name.
    pub fn change_detail(
        stock: &mut Stock,
        position: usize,
        field: ItemField,
        value: &str,
    ) -> ServiceResult<String> {
        let id = stock.id_at(position)?;

        let change = match field {
            ItemField::Name => {
                let name = Self::validate_name(value)?;
                stock.ensure_unique_name(name, Some(id))?;
                Change::Name(name.to_string())
            }
            ItemField::Price => Change::Price(Self::parse_price(value)?),
            ItemField::Quantity => Change::Quantity(Self::parse_quantity(value)?),
        };

        let item = stock
            .item_mut(id)
            .ok_or(ValidationError::UnknownItem(id))?;
        match change {
            Change::Name(name) => item.name = name,
            Change::Price(price) => item.price = price,
            Change::Quantity(quantity) => item.quantity = quantity,
        }
        tracing::debug!(%id, field = field.label(), "item updated");
        Ok(item.name.clone())
    }

    /// Parses a non-negative unit price.
    pub fn parse_price(raw: &str) -> ServiceResult<f64> {
        let trimmed = raw.trim();
        let price: f64 = trimmed
            .parse()
            .map_err(|_| StockError::InputFormat(trimmed.to_string()))?;
        if !price.is_finite() {
            return Err(StockError::InputFormat(trimmed.to_string()));
        }
        Self::validate_price(price)?;
        Ok(price)
    }

    /// Parses a non-negative whole quantity.
    pub fn parse_quantity(raw: &str) -> ServiceResult<i64> {
        let trimmed = raw.trim();
        let quantity: i64 = trimmed
            .parse()
            .map_err(|_| StockError::InputFormat(trimmed.to_string()))?;
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity.into());
        }
        Ok(quantity)
    }

    /// Parses an item position. Negative numbers are well-formed but never a
    /// valid position, so they map to position 0.
    pub fn parse_position(raw: &str) -> ServiceResult<usize> {
        let trimmed = raw.trim();
        let position: i64 = trimmed
            .parse()
            .map_err(|_| StockError::InputFormat(trimmed.to_string()))?;
        Ok(usize::try_from(position).unwrap_or(0))
    }

    fn validate_name(name: &str) -> ServiceResult<&str> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Err(ValidationError::EmptyName.into())
        } else {
            Ok(trimmed)
        }
    }

    fn validate_price(price: f64) -> ServiceResult<()> {
        if !price.is_finite() {
            return Err(StockError::InputFormat(price.to_string()));
        }
        if price < 0.0 {
            return Err(ValidationError::NegativePrice.into());
        }
        Ok(())
    }
}

enum Change {
    Name(String),
    Price(f64),
    Quantity(i64),
}
