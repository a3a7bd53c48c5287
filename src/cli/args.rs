//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// zkwasm - scaffold, build and check zkWasm applications.
#[derive(Debug, Parser)]
#[command(name = "zkwasm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that build artifacts are ready to deploy
    Check(CheckArgs),

    /// Create a new zkWasm application
    Init(InitArgs),

    /// Verify the local toolchain
    Doctor,

    /// Validate project structure
    Validate,

    /// Build the WebAssembly artifacts
    Build(BuildArgs),

    /// Show previous readiness checks
    History(HistoryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Catalog base URL (overrides config and ZKWASM_CATALOG_URL)
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Do not append this run to the deployment history
    #[arg(long)]
    pub no_record: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Overwrite files in an existing directory
    #[arg(long)]
    pub force: bool,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Print the build commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, clap::Args)]
pub struct HistoryArgs {
    /// Number of records to show
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

impl Default for HistoryArgs {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
