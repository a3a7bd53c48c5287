//! Human-readable rendering of a [`CheckReport`].

use crate::ui::{hints, UserInterface};

use super::report::{keys, CheckReport};

/// Print the report summary, followed by next-step hints.
pub fn render(report: &CheckReport, ui: &mut dyn UserInterface, verbose: bool) {
    let total = report.checks.len();
    let passed = report.passed_count();

    ui.message("");
    if passed == total {
        ui.success(&format!("{}/{} checks passed", passed, total));
    } else {
        ui.message(&format!("{}/{} checks passed", passed, total));
    }

    if let Some(md5) = report.info(keys::MD5_HASH) {
        ui.message(&format!("  Image MD5:   {}", md5));
    }
    if let Some(name) = report.info(keys::IMAGE_NAME) {
        ui.message(&format!("  Image name:  {}", name));
    }
    if verbose {
        for (key, value) in &report.info {
            ui.message(&format!("  {}: {}", key, value));
        }
    }

    if !report.warnings.is_empty() {
        ui.message("");
        ui.message(&format!("Warnings ({}):", report.warnings.len()));
        for warning in &report.warnings {
            ui.warning(&format!("  {}", warning));
        }
    }

    if !report.errors.is_empty() {
        ui.message("");
        ui.message(&format!("Errors ({}):", report.errors.len()));
        for error in &report.errors {
            ui.error(&format!("  {}", error));
        }
    }

    ui.message("");
    if report.success {
        ui.success("Ready to deploy");
        for hint in hints::after_check_success() {
            ui.show_hint(hint);
        }
    } else {
        ui.error("Not ready to deploy");
        ui.show_hint(hints::after_check_failure());
    }
}
