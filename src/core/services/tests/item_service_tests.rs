use crate::core::services::ItemService;
use crate::domain::{ItemField, Stock};
use crate::errors::{StockError, ValidationError};

use super::stock_with;

#[test]
fn add_item_appends_with_given_fields() {
    let mut stock = Stock::new();

    let id = ItemService::add_item(&mut stock, "Rice", 100.0, 12).unwrap();

    assert_eq!(stock.len(), 1);
    let item = stock.item(id).unwrap();
    assert_eq!(item.name, "Rice");
    assert_eq!(item.price, 100.0);
    assert_eq!(item.quantity, 12);
    assert_eq!(stock.position_of(id), Some(1));
}

#[test]
fn duplicate_name_is_rejected_ignoring_case() {
    let (mut stock, _) = stock_with(&[("Sugar", 50.0, 3)]);
    let before = stock.clone();

    let err = ItemService::add_item(&mut stock, "sUGAR", 70.0, 1).unwrap_err();

    assert_eq!(
        err,
        StockError::Validation(ValidationError::DuplicateName("sUGAR".into()))
    );
    assert_eq!(stock, before);
}

#[test]
fn negative_price_or_quantity_is_rejected() {
    let mut stock = Stock::new();

    let price = ItemService::add_item(&mut stock, "Salt", -1.0, 3).unwrap_err();
    let quantity = ItemService::add_item(&mut stock, "Salt", 1.0, -3).unwrap_err();

    assert_eq!(price, StockError::from(ValidationError::NegativePrice));
    assert_eq!(quantity, StockError::from(ValidationError::NegativeQuantity));
    assert!(stock.is_empty());
}

#[test]
fn blank_name_is_rejected() {
    let mut stock = Stock::new();
    let err = ItemService::add_item(&mut stock, "   ", 1.0, 1).unwrap_err();
    assert_eq!(err, StockError::from(ValidationError::EmptyName));
}

#[test]
fn zero_price_and_quantity_are_allowed() {
    let mut stock = Stock::new();
    assert!(ItemService::add_item(&mut stock, "Sample", 0.0, 0).is_ok());
}

#[test]
fn change_detail_updates_each_field() {
    let (mut stock, ids) = stock_with(&[("Rice", 100.0, 12), ("Beans", 80.0, 4)]);

    ItemService::change_detail(&mut stock, 2, ItemField::Price, "95").unwrap();
    ItemService::change_detail(&mut stock, 2, ItemField::Quantity, " 40 ").unwrap();
    let name = ItemService::change_detail(&mut stock, 2, ItemField::Name, "Brown Beans").unwrap();

    assert_eq!(name, "Brown Beans");
    let beans = stock.item(ids[1]).unwrap();
    assert_eq!(beans.price, 95.0);
    assert_eq!(beans.quantity, 40);
    assert_eq!(stock.item(ids[0]).unwrap().price, 100.0);
}

#[test]
fn change_detail_out_of_range_leaves_stock_untouched() {
    let (mut stock, _) = stock_with(&[("Rice", 100.0, 12)]);
    let before = stock.clone();

    for position in [0, 2] {
        let err = ItemService::change_detail(&mut stock, position, ItemField::Price, "10")
            .unwrap_err();
        assert_eq!(err, StockError::from(ValidationError::InvalidItemId(position)));
    }
    assert_eq!(stock, before);
}

#[test]
fn change_detail_rejects_bad_numbers() {
    let (mut stock, _) = stock_with(&[("Rice", 100.0, 12)]);
    let before = stock.clone();

    let format = ItemService::change_detail(&mut stock, 1, ItemField::Quantity, "ten").unwrap_err();
    let negative = ItemService::change_detail(&mut stock, 1, ItemField::Price, "-5").unwrap_err();
    let fractional =
        ItemService::change_detail(&mut stock, 1, ItemField::Quantity, "2.5").unwrap_err();

    assert!(matches!(format, StockError::InputFormat(_)));
    assert_eq!(negative, StockError::from(ValidationError::NegativePrice));
    assert!(matches!(fractional, StockError::InputFormat(_)));
    assert_eq!(stock, before);
}

#[test]
fn rename_cannot_collide_with_another_item() {
    let (mut stock, _) = stock_with(&[("Rice", 100.0, 12), ("Beans", 80.0, 4)]);

    let err = ItemService::change_detail(&mut stock, 2, ItemField::Name, "RICE").unwrap_err();
    assert_eq!(err, StockError::from(ValidationError::DuplicateName("RICE".into())));

    // Changing only the case of its own name is fine.
    ItemService::change_detail(&mut stock, 1, ItemField::Name, "RICE").unwrap();
    assert_eq!(stock.items()[0].name, "RICE");
}

#[test]
fn blank_rename_is_rejected() {
    let (mut stock, _) = stock_with(&[("Rice", 100.0, 12)]);
    let before = stock.clone();

    let err = ItemService::change_detail(&mut stock, 1, ItemField::Name, "   ").unwrap_err();
    assert_eq!(err, StockError::from(ValidationError::EmptyName));
    assert_eq!(stock, before);
}

#[test]
fn parse_helpers() {
    assert_eq!(ItemService::parse_price("12.5").unwrap(), 12.5);
    assert!(matches!(
        ItemService::parse_price("inf"),
        Err(StockError::InputFormat(_))
    ));
    assert!(matches!(
        ItemService::parse_price("abc"),
        Err(StockError::InputFormat(_))
    ));
    assert_eq!(ItemService::parse_quantity("7").unwrap(), 7);
    assert_eq!(
        ItemService::parse_quantity("-7").unwrap_err(),
        StockError::from(ValidationError::NegativeQuantity)
    );
    assert_eq!(ItemService::parse_position("3").unwrap(), 3);
    assert_eq!(ItemService::parse_position("-3").unwrap(), 0);
    assert!(ItemService::parse_position("x").is_err());
}
