use std::{borrow::Cow, fmt, io};

use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::{ValidationContext, ValidationResult, Validator},
    Context as ReadlineContext, Helper,
};
use shell_words::split;

use crate::cli::commands::{self, CommandRegistry};
use crate::cli::core::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::io::{InteractivePrompter, LineInput, Prompter, ScriptPrompter};
use crate::cli::output::info as output_info;
use crate::config::ConfigManager;
use crate::errors::CliError;

const SCRIPT_ENV: &str = "RETAIL_CORE_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let registry = CommandRegistry::new(commands::all_definitions());
    let prompter: Box<dyn Prompter> = match mode {
        CliMode::Interactive => Box::new(InteractivePrompter::new(registry.names().collect())?),
        CliMode::Script => Box::new(ScriptPrompter::new(io::stdin().lock())),
    };

    let mut context = ShellContext::new(mode, registry, prompter, ConfigManager::new())?;
    if mode == CliMode::Interactive {
        output_info("Retail Core shell. Type `help` for commands.");
    }
    run_session(&mut context)
}

/// Runs the command loop until `exit` or end of input.
pub fn run_session(context: &mut ShellContext) -> Result<(), CliError> {
    while context.running {
        let prompt = context.prompt();
        match context.prompter.read_command(&prompt)? {
            LineInput::Line(line) => match handle_line(context, &line) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) => context.report_error(err),
            },
            LineInput::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
            }
            LineInput::Eof => {
                if context.mode == CliMode::Interactive {
                    output_info("Exiting shell.");
                }
                break;
            }
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let tokens = match parse_command_line(trimmed) {
        Ok(tokens) => tokens,
        Err(err) => {
            crate::cli::io::print_warning(err);
            return Ok(LoopControl::Continue);
        }
    };
    let Some(raw) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };

    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

pub(crate) struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    pub(crate) fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        // Only the command word itself is completed.
        if !prefix[..start].trim().is_empty() {
            return (start, Vec::new());
        }

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::test_support::scripted_context;

    #[test]
    fn session_runs_a_full_day() {
        let (mut context, _dir) = scripted_context(
            "# stock up\nadd\nRice\n100\n12\ny\nBeans\n50\n20\nn\npurchase\n1\n4\n2\n11\n\ngain\nexit\nlist\n",
        );

        run_session(&mut context).unwrap();

        assert!(!context.running);
        assert_eq!(context.stock.items()[0].quantity, 8);
        assert_eq!(context.stock.items()[1].quantity, 9);
        assert!((context.gain.total() - 1195.0).abs() < 1e-9);
    }

    #[test]
    fn unbalanced_quotes_are_reported_not_fatal() {
        let (mut context, _dir) = scripted_context("add \"Rice\n");
        run_session(&mut context).unwrap();
        assert!(context.stock.is_empty());
    }

    #[test]
    fn completion_only_covers_command_word() {
        let helper = CommandHelper::new(vec!["set-price", "set-name", "list"]);
        let (start, pairs) = helper.candidates("set-p", 5);
        assert_eq!(start, 0);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "set-price");

        let (_, pairs) = helper.candidates("list se", 7);
        assert!(pairs.is_empty());
    }
}
