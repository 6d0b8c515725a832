//! Terminal front end: line commands, screen rendering and the input loop.

pub mod commands;
pub mod render;
mod shell;

pub use commands::{Command, CommandError, HELP};
pub use shell::TerminalShell;
