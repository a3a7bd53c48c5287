//! Command-line interface for zkwasm.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    BuildArgs, CheckArgs, Cli, Commands, CompletionsArgs, HistoryArgs, InitArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
