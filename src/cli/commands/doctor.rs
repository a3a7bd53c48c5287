//! Doctor command implementation.
//!
//! The `zkwasm doctor` command reports which toolchain binaries are
//! available. It never installs anything.

use std::path::{Path, PathBuf};

use crate::config::load_merged_config;
use crate::error::Result;
use crate::requirements::{DoctorReport, ToolChecker, ToolStatus};
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand {
    project_root: PathBuf,
    path_entries: Option<Vec<PathBuf>>,
}

impl DoctorCommand {
    /// Create a new doctor command using the process PATH.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            path_entries: None,
        }
    }

    /// Probe explicit PATH entries instead of the process PATH.
    pub fn with_path(mut self, entries: Vec<PathBuf>) -> Self {
        self.path_entries = Some(entries);
        self
    }

    fn checker(&self) -> ToolChecker {
        match &self.path_entries {
            Some(entries) => ToolChecker::with_path(entries.clone()),
            None => ToolChecker::new(),
        }
    }

    fn render(report: &DoctorReport, ui: &mut dyn UserInterface) {
        for tool in &report.tools {
            match &tool.status {
                ToolStatus::Found { path, version } => {
                    let version = version.as_deref().unwrap_or("unknown version");
                    ui.success(&format!("{} {} ({})", tool.name, version, path.display()));
                }
                ToolStatus::Missing { install_hint } => {
                    let line = match install_hint {
                        Some(hint) => format!("{} not found ({})", tool.name, hint),
                        None => format!("{} not found", tool.name),
                    };
                    if tool.required {
                        ui.error(&line);
                    } else {
                        ui.warning(&format!("{} [optional]", line));
                    }
                }
            }
        }
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_merged_config(&self.project_root)?;

        ui.show_header("Toolchain");
        let report = self.checker().check_all(&config.requires);
        Self::render(&report, ui);

        let found = report.tools.iter().filter(|t| t.status.is_found()).count();
        ui.message("");
        ui.message(&format!("{}/{} tools found", found, report.tools.len()));

        if report.is_healthy() {
            ui.success("Toolchain ready");
            Ok(CommandResult::success())
        } else {
            ui.error(&format!(
                "Missing required tools: {}",
                report.missing_required().join(", ")
            ));
            ui.show_hint(hints::after_failed_doctor());
            Ok(CommandResult::failure(1))
        }
    }
}
