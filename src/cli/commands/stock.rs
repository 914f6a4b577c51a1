use super::CommandEntry;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::forms;
use crate::cli::io;
use crate::cli::output;
use crate::domain::ItemField;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show the current stock", "list", cmd_list),
        CommandEntry::new("add", "Add new items to the stock", "add", cmd_add),
        CommandEntry::new("set-name", "Rename stock items", "set-name", cmd_set_name),
        CommandEntry::new(
            "set-price",
            "Change the unit price of stock items",
            "set-price",
            cmd_set_price,
        ),
        CommandEntry::new(
            "set-quantity",
            "Change the quantity held of stock items",
            "set-quantity",
            cmd_set_quantity,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_arguments("list", args)?;
    if context.stock.is_empty() {
        io::print_info("Stock is empty.");
        return Ok(());
    }

    output::section("Stock");
    io::print_info(format!(
        "{:>4}  {:<30} {:>12} {:>8}",
        "ID", "Item", "Unit price", "Qty"
    ));
    for (idx, item) in context.stock.items().iter().enumerate() {
        io::print_info(format!(
            "{:>4}  {:<30} {:>12} {:>8}",
            idx + 1,
            item.name,
            format!("{}{}", context.config.currency_symbol, item.price),
            item.quantity
        ));
    }
    output::blank_line();
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_arguments("add", args)?;
    forms::add_items(context)
}

fn cmd_set_name(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_arguments("set-name", args)?;
    forms::change_details(context, ItemField::Name)
}

fn cmd_set_price(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_arguments("set-price", args)?;
    forms::change_details(context, ItemField::Price)
}

fn cmd_set_quantity(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    no_arguments("set-quantity", args)?;
    forms::change_details(context, ItemField::Quantity)
}

fn no_arguments(command: &str, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!(
            "`{}` takes no arguments; fields are prompted for",
            command
        )))
    }
}
