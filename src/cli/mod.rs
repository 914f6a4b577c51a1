pub mod commands;
pub mod core;
pub mod forms;
mod help;
pub mod io;
pub mod output;
mod shell;

pub use self::core::{CliMode, CommandError, ShellContext};
pub use shell::{run_cli, run_session};
