pub mod common;
pub mod item;
pub mod purchase;
pub mod stock;

pub use common::NamedEntity;
pub use item::{Item, ItemField, ItemId};
pub use purchase::{Purchase, PurchaseLine};
pub use stock::Stock;
