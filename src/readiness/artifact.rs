//! Artifact presence check.

use std::fs;
use std::path::PathBuf;

use super::report::{keys, CheckOutcome, CheckReport};
use super::ReadinessCheck;

/// Confirms the compiled image and its declaration file exist.
#[derive(Debug, Clone)]
pub struct ArtifactCheck {
    wasm_path: PathBuf,
    declaration_path: PathBuf,
    verbose: bool,
}

impl ArtifactCheck {
    /// Create a check for the given artifact paths.
    pub fn new(wasm_path: PathBuf, declaration_path: PathBuf, verbose: bool) -> Self {
        Self {
            wasm_path,
            declaration_path,
            verbose,
        }
    }
}

impl ReadinessCheck for ArtifactCheck {
    fn name(&self) -> &'static str {
        "artifacts"
    }

    fn run(&self, _report: &CheckReport) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();

        let required = [
            (&self.wasm_path, keys::WASM_SIZE),
            (&self.declaration_path, keys::DTS_SIZE),
        ];

        for (path, size_key) in required {
            match fs::metadata(path) {
                Ok(meta) if meta.is_file() => {
                    if path == &self.wasm_path {
                        outcome.record(keys::WASM_PATH, path.display().to_string());
                    }
                    if self.verbose {
                        outcome.record(size_key, meta.len().to_string());
                    }
                }
                Ok(_) => outcome.error(format!(
                    "Expected a file but found a directory: {}",
                    path.display()
                )),
                Err(_) => outcome.error(format!(
                    "Missing build artifact: {} (run `zkwasm build` first)",
                    path.display()
                )),
            }
        }

        tracing::debug!(
            "Artifact check finished with {} error(s)",
            outcome.errors.len()
        );
        outcome
    }
}
