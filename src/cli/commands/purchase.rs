use super::CommandEntry;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::output;
use crate::core::services::{ItemService, PurchaseService, StockService};
use crate::domain::Purchase;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "purchase",
            "Record a purchase and print its receipt",
            "purchase [ID=QTY ...]",
            cmd_purchase,
        ),
        CommandEntry::new("gain", "Show today's total gain", "gain", cmd_gain),
    ]
}

fn cmd_purchase(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let purchase = if args.is_empty() {
        forms::collect_purchase(context)?
    } else {
        parse_lines(context, args)?
    };
    if purchase.is_empty() {
        io::print_warning("No items purchased.");
        return Ok(());
    }

    let receipt = PurchaseService::make_purchase(&context.stock, &purchase)?;
    output::verbatim(receipt.render(&context.config.currency_symbol));

    let shortfalls = StockService::update_stock(&mut context.stock, &purchase)?;
    for shortfall in &shortfalls {
        io::print_warning(format!(
            "'{}' is overdrawn: quantity is now {}",
            shortfall.name, shortfall.quantity
        ));
    }

    context.gain.add_gain(receipt.total);
    tracing::info!(
        lines = receipt.lines.len(),
        total = receipt.total,
        gain = context.gain.total(),
        "purchase recorded"
    );
    Ok(())
}

/// Parses inline `ID=QTY` lines, where ID is the listing position.
fn parse_lines(context: &ShellContext, args: &[&str]) -> Result<Purchase, CommandError> {
    let mut purchase = Purchase::new();
    for arg in args {
        let invalid = |reason: String| {
            CommandError::InvalidArguments(format!("invalid purchase line `{}`: {}", arg, reason))
        };
        let (raw_id, raw_quantity) = arg
            .split_once('=')
            .ok_or_else(|| invalid("expected ID=QTY".into()))?;
        let id = ItemService::parse_position(raw_id)
            .and_then(|position| context.stock.id_at(position))
            .map_err(|err| invalid(err.to_string()))?;
        let quantity =
            forms::parse_purchase_quantity(raw_quantity).map_err(|err| invalid(err.to_string()))?;
        purchase.set(id, quantity);
    }
    Ok(purchase)
}

fn cmd_gain(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::verbatim(context.gain.view_gain());
    Ok(())
}
