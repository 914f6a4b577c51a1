//! Prompt loops for the item editor and purchase entry. Bad input is reported
//! and the current entry is abandoned; the operator then decides whether to go
//! again. Nothing here aborts the shell.

use crate::core::services::ItemService;
use crate::domain::{ItemField, Purchase};
use crate::errors::StockError;

use super::core::{CommandError, ShellContext};
use super::io as cli_io;
use super::output;

enum Entry {
    Done,
    /// Input ran out mid-entry.
    Exhausted,
}

/// Repeatedly adds items until the operator answers `n`.
pub fn add_items(context: &mut ShellContext) -> Result<(), CommandError> {
    loop {
        if let Entry::Exhausted = add_one(context)? {
            break;
        }
        if !ask_again(context, "Do you want to add another item (y/n)? ")? {
            break;
        }
    }
    output::blank_line();
    Ok(())
}

fn add_one(context: &mut ShellContext) -> Result<Entry, CommandError> {
    let Some(name) = context.prompter.read_answer("Enter Item Name: ")? else {
        return Ok(Entry::Exhausted);
    };
    let Some(raw_price) = context.prompter.read_answer("Enter Unit Price of item: ")? else {
        return Ok(Entry::Exhausted);
    };
    let price = match ItemService::parse_price(&raw_price) {
        Ok(price) => price,
        Err(err) => return rejected(err),
    };
    let Some(raw_quantity) = context.prompter.read_answer("Enter item Quantity: ")? else {
        return Ok(Entry::Exhausted);
    };
    let quantity = match ItemService::parse_quantity(&raw_quantity) {
        Ok(quantity) => quantity,
        Err(err) => return rejected(err),
    };

    match ItemService::add_item(&mut context.stock, &name, price, quantity) {
        Ok(_) => cli_io::print_success(format!(
            "New item '{}' successfully added.",
            name.trim()
        )),
        Err(err) => cli_io::print_error(err),
    }
    Ok(Entry::Done)
}

/// Repeatedly edits `field` on items chosen by position until the operator
/// answers `n`.
pub fn change_details(context: &mut ShellContext, field: ItemField) -> Result<(), CommandError> {
    if context.stock.is_empty() {
        cli_io::print_warning("Stock is empty. Use `add` first.");
        return Ok(());
    }

    let again = format!("Do you want to change the {field} of another item (y/n)? ");
    loop {
        if let Entry::Exhausted = change_one(context, field)? {
            break;
        }
        if !ask_again(context, &again)? {
            break;
        }
    }
    output::blank_line();
    Ok(())
}

fn change_one(context: &mut ShellContext, field: ItemField) -> Result<Entry, CommandError> {
    let Some(raw_id) = context.prompter.read_answer("Enter item ID: ")? else {
        return Ok(Entry::Exhausted);
    };
    // The position is checked before asking for a value.
    let position = match ItemService::parse_position(&raw_id)
        .and_then(|position| context.stock.id_at(position).map(|_| position))
    {
        Ok(position) => position,
        Err(err) => return rejected(err),
    };
    let Some(value) = context
        .prompter
        .read_answer(&format!("Enter new {field}: "))?
    else {
        return Ok(Entry::Exhausted);
    };

    match ItemService::change_detail(&mut context.stock, position, field, &value) {
        Ok(name) => cli_io::print_success(format!("{field} of '{name}' successfully changed")),
        Err(err) => cli_io::print_error(err),
    }
    Ok(Entry::Done)
}

/// Collects purchase lines by position until a blank item ID.
pub fn collect_purchase(context: &mut ShellContext) -> Result<Purchase, CommandError> {
    let mut purchase = Purchase::new();
    loop {
        let Some(raw_id) = context
            .prompter
            .read_answer("Enter item ID (blank to finish): ")?
        else {
            break;
        };
        if raw_id.trim().is_empty() {
            break;
        }
        let id = match ItemService::parse_position(&raw_id)
            .and_then(|position| context.stock.id_at(position))
        {
            Ok(id) => id,
            Err(err) => {
                cli_io::print_error(err);
                continue;
            }
        };
        let Some(raw_quantity) = context.prompter.read_answer("Enter quantity: ")? else {
            break;
        };
        match parse_purchase_quantity(&raw_quantity) {
            Ok(quantity) => purchase.set(id, quantity),
            Err(err) => cli_io::print_error(err),
        }
    }
    Ok(purchase)
}

pub(crate) fn parse_purchase_quantity(raw: &str) -> Result<u32, StockError> {
    let quantity = ItemService::parse_quantity(raw)?;
    u32::try_from(quantity).map_err(|_| StockError::InputFormat(raw.trim().to_string()))
}

fn rejected(err: StockError) -> Result<Entry, CommandError> {
    cli_io::print_error(err);
    Ok(Entry::Done)
}

/// Asks a y/n question until it gets one. Exhausted input counts as `n`.
fn ask_again(context: &mut ShellContext, prompt: &str) -> Result<bool, CommandError> {
    loop {
        let Some(answer) = context.prompter.read_answer(prompt)? else {
            return Ok(false);
        };
        match answer.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => cli_io::print_error("Invalid Input!!"),
        }
    }
}
