use std::fmt;
use std::io::{self, BufRead, Lines};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use rustyline::{error::ReadlineError, history::DefaultHistory, Cmd, Editor, KeyEvent};

use crate::cli::core::CommandError;
use crate::cli::output;
use crate::cli::shell::CommandHelper;
use crate::errors::CliError;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// One read from the shell's command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Line(String),
    Interrupted,
    Eof,
}

/// Source of operator input. Interactive sessions use a terminal editor;
/// scripted sessions feed both command lines and prompt answers from one
/// reader, in order.
pub trait Prompter {
    fn read_command(&mut self, prompt: &str) -> Result<LineInput, CliError>;

    /// Answer to a field prompt, or `None` once input is exhausted.
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>, CommandError>;
}

pub struct ScriptPrompter<R> {
    lines: Lines<R>,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn read_command(&mut self, _prompt: &str) -> Result<LineInput, CliError> {
        match self.lines.next() {
            Some(line) => Ok(LineInput::Line(line?)),
            None => Ok(LineInput::Eof),
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        // Echo the prompt so transcripts read like an interactive session.
        println!("{}", prompt.trim_end());
        match self.lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }
}

pub struct InteractivePrompter {
    editor: Editor<CommandHelper, DefaultHistory>,
    theme: ColorfulTheme,
}

impl InteractivePrompter {
    pub fn new(command_names: Vec<&'static str>) -> Result<Self, CliError> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CommandHelper::new(command_names)));
        editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
        Ok(Self {
            editor,
            theme: ColorfulTheme::default(),
        })
    }
}

impl Prompter for InteractivePrompter {
    fn read_command(&mut self, prompt: &str) -> Result<LineInput, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(LineInput::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(LineInput::Interrupted),
            Err(ReadlineError::Eof) => Ok(LineInput::Eof),
            Err(err) => Err(err.into()),
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        let label = prompt.trim_end().trim_end_matches(':');
        match Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
