pub mod item_service;
pub mod purchase_service;
pub mod stock_service;

pub use item_service::ItemService;
pub use purchase_service::{PurchaseService, VatTier};
pub use stock_service::{Shortfall, StockService};

use crate::errors::StockError;

pub type ServiceResult<T> = Result<T, StockError>;

#[cfg(test)]
mod tests;
