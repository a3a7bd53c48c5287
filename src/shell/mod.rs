//! Shell command execution and platform detection.

mod command;
mod platform;

pub use command::{
    execute, execute_streaming, run_program, CommandOptions, CommandResult, OutputCallback,
    OutputLine,
};
pub use platform::{is_ci, is_ci_with, shell_executable, shell_flag};
