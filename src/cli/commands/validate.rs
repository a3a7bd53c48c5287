//! Validate command implementation.
//!
//! The `zkwasm validate` command checks the project layout before a build.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::UserInterface;
use crate::validate::validate_project;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(&format!("Validating {}", self.project_root.display()));

        let report = validate_project(&self.project_root);

        for warning in &report.warnings {
            ui.warning(warning);
        }
        for error in &report.errors {
            ui.error(error);
        }

        ui.message(&format!(
            "{}/{} checks passed",
            report.passed_count(),
            report.checks.len()
        ));

        if report.success {
            ui.success("Project structure is valid");
        } else {
            ui.error("Project structure is invalid");
        }

        Ok(CommandResult::from_success(report.success))
    }
}
