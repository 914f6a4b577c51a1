use serde::{Deserialize, Serialize};

use crate::core::receipt::{Receipt, ReceiptLine};
use crate::domain::{Purchase, Stock};
use crate::errors::ValidationError;

use super::ServiceResult;

const STANDARD_RATE: f64 = 0.20;
const BULK_RATE: f64 = 0.30;
/// Quantities below this pay the standard rate.
const EXEMPT_FROM: u32 = 5;
/// Quantities above this pay the bulk rate.
const EXEMPT_UNTIL: u32 = 10;

/// A purchase needs strictly more distinct lines than this for a voucher.
pub const VOUCHER_MIN_LINES: usize = 10;
pub const VOUCHER_MIN_UNIT_PRICE: f64 = 100.0;
pub const BONUS_VOUCHER_VALUE: f64 = 800.0;

/// VAT band selected purely by the purchased quantity of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatTier {
    /// Fewer than 5 units: 20%.
    Standard,
    /// 5 to 10 units inclusive: no VAT.
    Exempt,
    /// More than 10 units: 30%.
    Bulk,
}

impl VatTier {
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity < EXEMPT_FROM {
            VatTier::Standard
        } else if quantity > EXEMPT_UNTIL {
            VatTier::Bulk
        } else {
            VatTier::Exempt
        }
    }

    pub fn rate(self) -> f64 {
        match self {
            VatTier::Standard => STANDARD_RATE,
            VatTier::Exempt => 0.0,
            VatTier::Bulk => BULK_RATE,
        }
    }

    /// Returns `(vat, amount_with_vat)` for a pre-tax amount.
    pub fn apply(self, amount: f64) -> (f64, f64) {
        match self {
            VatTier::Exempt => (0.0, amount),
            tier => (amount * tier.rate(), amount * (1.0 + tier.rate())),
        }
    }
}

pub struct PurchaseService;

impl PurchaseService {
    /// Prices every purchase line against the stock and builds the receipt.
    /// Stock is only read; quantities on hand are not checked.
    pub fn make_purchase(stock: &Stock, purchase: &Purchase) -> ServiceResult<Receipt> {
        let mut lines = Vec::with_capacity(purchase.len());
        let mut total_vat = 0.0;
        let mut total = 0.0;
        let mut min_unit_price: Option<f64> = None;

        for requested in purchase.lines() {
            let item = stock
                .item(requested.item_id)
                .ok_or(ValidationError::UnknownItem(requested.item_id))?;
            let unit_price = item.price;
            let tier = VatTier::for_quantity(requested.quantity);
            let (vat, amount) = tier.apply(f64::from(requested.quantity) * unit_price);

            min_unit_price = Some(min_unit_price.map_or(unit_price, |min| min.min(unit_price)));
            total_vat += vat;
            total += amount;
            lines.push(ReceiptLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price,
                quantity: requested.quantity,
                tier,
                vat,
                amount,
            });
        }

        let voucher = Self::voucher_for(purchase.len(), min_unit_price);
        tracing::debug!(lines = lines.len(), total, total_vat, ?voucher, "purchase priced");
        Ok(Receipt {
            lines,
            total_vat,
            total,
            voucher,
        })
    }

    /// Bonus voucher for purchases of more than ten distinct items that all
    /// cost at least 100 per unit.
    pub fn voucher_for(distinct_lines: usize, min_unit_price: Option<f64>) -> Option<f64> {
        match min_unit_price {
            Some(min) if distinct_lines > VOUCHER_MIN_LINES && min >= VOUCHER_MIN_UNIT_PRICE => {
                Some(BONUS_VOUCHER_VALUE)
            }
            _ => None,
        }
    }
}
