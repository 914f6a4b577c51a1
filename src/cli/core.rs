//! Shell context, dispatch and error reporting.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::config::{Config, ConfigManager};
use crate::core::GainTracker;
use crate::domain::Stock;
use crate::errors::{CliError, StockError};

use super::commands::{CommandEntry, CommandRegistry};
use super::io::{self as cli_io, Prompter};
use super::output::{self, OutputPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Stock(#[from] StockError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("exit requested")]
    ExitRequested,
}

/// Everything one shell session owns: the stock, the day's gain and the
/// operator's input source.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub stock: Stock,
    pub gain: GainTracker,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub prompter: Box<dyn Prompter>,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(
        mode: CliMode,
        registry: CommandRegistry,
        prompter: Box<dyn Prompter>,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences::from(&config));
        tracing::debug!(?mode, path = %config_manager.path().display(), "shell context ready");
        Ok(Self {
            mode,
            registry,
            stock: Stock::new(),
            gain: GainTracker::new(),
            config,
            config_manager,
            prompter,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        format!("retail [{} items]> ", self.stock.len())
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn persist_config(&mut self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        output::set_preferences(OutputPreferences::from(&self.config));
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|entry| entry.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        match cli_io::confirm_action(&self.theme, "Exit shell?", true) {
            Ok(answer) => Ok(answer),
            Err(CommandError::Dialoguer(dialoguer::Error::IO(err))) => Err(err.into()),
            Err(_) => Ok(true),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            other => {
                tracing::debug!(error = %other, "command failed");
                cli_io::print_error(other);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;
    use crate::cli::commands;
    use crate::cli::io::ScriptPrompter;

    /// Context fed from `script`, with configuration under a throwaway dir.
    pub(crate) fn scripted_context(script: &str) -> (ShellContext, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let context = ShellContext::new(
            CliMode::Script,
            CommandRegistry::new(commands::all_definitions()),
            Box::new(ScriptPrompter::new(Cursor::new(script.to_string()))),
            ConfigManager::with_base_dir(dir.path().to_path_buf()),
        )
        .expect("shell context");
        (context, dir)
    }
}
