use serde::{Deserialize, Serialize};

use crate::core::services::VatTier;
use crate::domain::ItemId;

/// Printed receipt width, borders included.
pub const RECEIPT_WIDTH: usize = 81;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub tier: VatTier,
    pub vat: f64,
    /// Line amount with VAT included.
    pub amount: f64,
}

/// Priced purchase. `total` already includes VAT; the voucher is informational
/// and is never deducted from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total_vat: f64,
    pub total: f64,
    pub voucher: Option<f64>,
}

impl Receipt {
    /// Renders the bordered receipt table. Every row ends with a newline.
    /// `currency` is expected to be a single character so the header cells
    /// keep their fixed widths.
    pub fn render(&self, currency: &str) -> String {
        let equals = "=".repeat(RECEIPT_WIDTH);
        let dashes = "-".repeat(RECEIPT_WIDTH);
        let mut out = String::new();

        push_line(&mut out, &equals);
        push_line(
            &mut out,
            &format!("|{:^width$}|", "RECEIPT", width = RECEIPT_WIDTH - 2),
        );
        push_line(&mut out, &dashes);
        push_line(
            &mut out,
            &format!(
                "| {:^30} || {:^8} || {:^3} || {:^10} || {:^10} |",
                "Item",
                format!("Unit ({currency})"),
                "Qty",
                format!("VAT ({currency})"),
                format!("Amount ({currency})"),
            ),
        );
        push_line(&mut out, &dashes);

        for line in &self.lines {
            push_line(
                &mut out,
                &row(
                    &line.name,
                    &line.unit_price.to_string(),
                    &line.quantity.to_string(),
                    line.vat,
                    line.amount,
                ),
            );
        }

        push_line(&mut out, &dashes);
        push_line(&mut out, &row("Total", "", "", self.total_vat, self.total));
        if let Some(voucher) = self.voucher {
            push_line(&mut out, &dashes);
            push_line(
                &mut out,
                &format!(
                    "| {:<width$} |",
                    format!("Bonus Voucher: {currency}{voucher}"),
                    width = RECEIPT_WIDTH - 4
                ),
            );
        }
        push_line(&mut out, &equals);
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn row(name: &str, unit: &str, quantity: &str, vat: f64, amount: f64) -> String {
    format!("| {name:<30} || {unit:>8} || {quantity:>3} || {vat:>10.2} || {amount:>10.2} |")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(voucher: Option<f64>) -> Receipt {
        Receipt {
            lines: vec![ReceiptLine {
                item_id: ItemId::new(),
                name: "Rice".into(),
                unit_price: 100.0,
                quantity: 4,
                tier: VatTier::Standard,
                vat: 80.0,
                amount: 480.0,
            }],
            total_vat: 80.0,
            total: 480.0,
            voucher,
        }
    }

    #[test]
    fn every_row_is_receipt_width() {
        for symbol in ["#", "$", "€"] {
            let text = receipt(Some(800.0)).render(symbol);
            for line in text.lines() {
                assert_eq!(line.chars().count(), RECEIPT_WIDTH, "bad row: {line:?}");
            }
        }
    }

    #[test]
    fn renders_rows_and_totals() {
        let text = receipt(None).render("#");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[1],
            format!("|{}RECEIPT{}|", " ".repeat(36), " ".repeat(36))
        );
        assert_eq!(
            lines[3],
            "|              Item              || Unit (#) || Qty ||  VAT (#)   || Amount (#) |"
        );
        assert_eq!(
            lines[5],
            "| Rice                           ||      100 ||   4 ||      80.00 ||     480.00 |"
        );
        assert_eq!(
            lines[7],
            "| Total                          ||          ||     ||      80.00 ||     480.00 |"
        );
        assert_eq!(lines.len(), 9);
        assert!(!text.contains("Bonus Voucher"));
    }

    #[test]
    fn voucher_row_sits_before_closing_border() {
        let text = receipt(Some(800.0)).render("#");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[9].starts_with("| Bonus Voucher: #800 "));
        assert!(lines[10].chars().all(|ch| ch == '='));
    }
}
