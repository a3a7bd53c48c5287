//! Build command implementation.
//!
//! The `zkwasm build` command runs the configured build commands in the
//! project root and reports the produced artifact.

use std::path::{Path, PathBuf};

use crate::cli::args::BuildArgs;
use crate::config::load_project_config;
use crate::error::Result;
use crate::shell::{execute, execute_streaming, CommandOptions, CommandResult as ShellResult, OutputLine};
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(project_root: &Path, args: BuildArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &BuildArgs {
        &self.args
    }

    fn run_one(&self, command: &str, verbose: bool) -> Result<ShellResult> {
        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            ..Default::default()
        };

        if verbose {
            execute_streaming(
                command,
                &options,
                Box::new(|line: OutputLine| match line {
                    OutputLine::Stdout(text) => println!("    {}", text),
                    OutputLine::Stderr(text) => eprintln!("    {}", text),
                }),
            )
        } else {
            execute(command, &options)
        }
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_project_config(&self.project_root)?;
        let commands = &config.build.commands;

        if commands.is_empty() {
            ui.error("No build commands configured under build.commands");
            return Ok(CommandResult::failure(1));
        }

        if self.args.dry_run {
            ui.show_header("Build plan (dry run)");
            for (i, command) in commands.iter().enumerate() {
                ui.message(&format!("  {}. {}", i + 1, command));
            }
            return Ok(CommandResult::success());
        }

        ui.show_header("Building");
        let verbose = ui.output_mode().is_verbose();

        for command in commands {
            let mut spinner = ui.start_spinner(command);
            let result = self.run_one(command, verbose)?;

            if !result.success {
                spinner.finish_error(&format!("{} (exit code {:?})", command, result.exit_code));
                ui.show_error_block(command, &result.combined_output());
                ui.show_hint(hints::after_failed_build());
                return Ok(CommandResult::failure(1));
            }

            spinner.finish_success(&format!(
                "{} ({:.1}s)",
                command,
                result.duration.as_secs_f64()
            ));
        }

        let wasm = config.wasm_path(&self.project_root);
        match std::fs::metadata(&wasm) {
            Ok(meta) => ui.success(&format!("Built {} ({} bytes)", wasm.display(), meta.len())),
            Err(_) => ui.warning(&format!(
                "Build finished but {} was not produced; check output_dir and artifact in the config",
                wasm.display()
            )),
        }
        ui.show_hint(hints::after_build());

        Ok(CommandResult::success())
    }
}
