//! Check command implementation.
//!
//! The `zkwasm check` command runs the readiness pipeline and reports
//! whether the built image is registered and ready to deploy.

use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{load_merged_config, CONFIG_DIR};
use crate::error::Result;
use crate::readiness::{summary, CheckReport, ReadinessChecker};
use crate::state::{DeploymentRecord, HistoryLog};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn run_checks(&self, ui: &mut dyn UserInterface, verbose: bool) -> Result<CheckReport> {
        let mut config = load_merged_config(&self.project_root)?;
        if let Some(url) = &self.args.catalog_url {
            config.catalog.url = url.clone();
        }

        let checker = ReadinessChecker::for_project(&self.project_root, &config, verbose)?;
        tracing::debug!("Readiness checks: {:?}", checker.check_names());

        if self.args.json {
            return Ok(checker.run());
        }

        ui.show_header("Deployment readiness");
        let mut spinner = ui.start_spinner(&format!(
            "Checking {} against {}",
            config.wasm_path(&self.project_root).display(),
            config.catalog.endpoint()
        ));
        let report = checker.run();
        if report.success {
            spinner.finish_success("Checks complete");
        } else {
            spinner.finish_error("Checks found problems");
        }
        Ok(report)
    }

    /// Append the run to the history log. Only done inside a project.
    fn record(&self, report: &CheckReport, started: chrono::DateTime<Utc>) {
        if self.args.no_record || !self.project_root.join(CONFIG_DIR).is_dir() {
            return;
        }

        let record = DeploymentRecord::from_report(report, started);
        if let Err(e) = HistoryLog::append(&self.project_root, record) {
            tracing::warn!("Failed to record deployment history: {}", e);
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let started = Utc::now();
        let verbose = ui.output_mode().is_verbose();

        let report = self.run_checks(ui, verbose)?;
        self.record(&report, started);

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            summary::render(&report, ui, verbose);
        }

        Ok(CommandResult::from_success(report.success))
    }
}
