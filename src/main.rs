//! zkwasm CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::Term;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zkwasm_cli::cli::{Cli, CommandDispatcher, Commands};
use zkwasm_cli::config::find_project_root;
use zkwasm_cli::shell::is_ci;
use zkwasm_cli::ui::{create_ui, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `check --json` output stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("zkwasm_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zkwasm_cli=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve the project root: `--project`, else the nearest enclosing
/// project, else the current directory.
///
/// `init` always uses the given or current directory as the parent of the
/// new project.
fn project_root(cli: &Cli) -> PathBuf {
    if let Some(project) = &cli.project {
        return project.clone();
    }

    let cwd = std::env::current_dir().unwrap_or_default();
    if matches!(cli.command, Commands::Init(_)) {
        return cwd;
    }
    find_project_root(&cwd).unwrap_or(cwd)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("zkwasm starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let project_root = project_root(&cli);
    tracing::debug!("Project root: {}", project_root.display());

    let is_interactive = !is_ci() && Term::stdout().is_term();
    let mut ui = create_ui(is_interactive, output_mode);

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
