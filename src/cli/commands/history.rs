//! History command implementation.
//!
//! The `zkwasm history` command shows previous readiness checks.

use std::path::{Path, PathBuf};

use crate::cli::args::HistoryArgs;
use crate::error::Result;
use crate::state::{DeploymentRecord, HistoryLog};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The history command implementation.
pub struct HistoryCommand {
    project_root: PathBuf,
    args: HistoryArgs,
}

impl HistoryCommand {
    /// Create a new history command.
    pub fn new(project_root: &Path, args: HistoryArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &HistoryArgs {
        &self.args
    }

    /// Format a single record line.
    fn format_record(record: &DeploymentRecord) -> String {
        let status = if record.success { "[ok]" } else { "[FAIL]" };
        let image = record.md5.as_deref().unwrap_or("no digest");
        format!(
            "{} {} {} ({} checks, {} warnings, {} errors, {}ms)",
            status,
            record.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            image,
            record.checks,
            record.warnings,
            record.errors,
            record.duration_ms
        )
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let log = HistoryLog::load(&self.project_root)?;
        let records = log.recent(self.args.limit);

        if records.is_empty() {
            ui.message("No deployment history for this project.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Deployment History");
        for record in records {
            ui.message(&Self::format_record(record));
            if let Some(error) = &record.first_error {
                ui.error(&format!("    {}", error));
            }
        }

        if let Some(latest) = log.last() {
            ui.message(&format!("\nLatest check: {}", latest.status_label()));
        }

        if log.records.len() > records.len() {
            ui.message(&format!(
                "\nShowing {} of {} records (use --limit to see more)",
                records.len(),
                log.records.len()
            ));
        }

        Ok(CommandResult::success())
    }
}
