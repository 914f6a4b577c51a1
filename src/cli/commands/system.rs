use super::CommandEntry;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output;
use crate::config::Config;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change settings",
            "config [currency <symbol> | plain <on|off>]",
            cmd_config,
        ),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::section("Configuration");
            io::print_info(format!("  currency : {}", context.config.currency_symbol));
            io::print_info(format!(
                "  plain    : {}",
                if context.config.plain_output { "on" } else { "off" }
            ));
            io::print_info(format!("  file     : {}", context.config_manager.path().display()));
            Ok(())
        }
        ["currency", symbol] => {
            let symbol = symbol.trim();
            if !Config::is_valid_currency_symbol(symbol) {
                return Err(CommandError::InvalidArguments(format!(
                    "currency symbol must be a single character, got `{}`",
                    symbol
                )));
            }
            context.config.currency_symbol = symbol.to_string();
            context.persist_config()?;
            io::print_success(format!("Currency symbol set to `{}`.", symbol));
            Ok(())
        }
        ["plain", value] => {
            context.config.plain_output = match value.to_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "expected on or off, got `{}`",
                        other
                    )))
                }
            };
            context.persist_config()?;
            io::print_success("Output preferences updated.");
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [currency <symbol> | plain <on|off>]".into(),
        )),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
