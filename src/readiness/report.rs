//! Readiness report and per-check outcomes.
//!
//! Each check produces a [`CheckOutcome`]; the runner folds outcomes into a
//! single [`CheckReport`] in check order. `success` is derived from the error
//! list on every fold, so it can never disagree with it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known keys of [`CheckReport::info`].
pub mod keys {
    /// Path of the compiled image, recorded when it exists.
    pub const WASM_PATH: &str = "wasm_path";
    /// Size in bytes of the compiled image (verbose only).
    pub const WASM_SIZE: &str = "wasm_size";
    /// Size in bytes of the declaration file (verbose only).
    pub const DTS_SIZE: &str = "dts_size";
    /// Uppercase hex MD5 of the compiled image.
    pub const MD5_HASH: &str = "md5_hash";
    /// Number of bytes that were hashed.
    pub const WASM_BYTES: &str = "wasm_bytes";
    /// Checksum the catalog holds for the image.
    pub const IMAGE_CHECKSUM: &str = "image_checksum";
    /// Display name the catalog holds for the image.
    pub const IMAGE_NAME: &str = "image_name";
    /// Circuit size the catalog holds for the image.
    pub const CIRCUIT_SIZE: &str = "circuit_size";
}

/// What a single check found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Non-fatal findings.
    pub warnings: Vec<String>,
    /// Fatal findings; any entry fails the run.
    pub errors: Vec<String>,
    /// Facts discovered, in discovery order.
    pub info: Vec<(String, String)>,
}

impl CheckOutcome {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Record an error.
    pub fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Record a discovered fact.
    pub fn record(&mut self, key: &str, value: impl Into<String>) {
        self.info.push((key.to_string(), value.into()));
    }

    /// Whether this check recorded no errors.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Aggregate result of a readiness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// True iff no errors were recorded.
    pub success: bool,
    /// Names of the checks that ran, in order.
    pub checks: Vec<String>,
    /// Non-fatal findings, in order.
    pub warnings: Vec<String>,
    /// Fatal findings, in order.
    pub errors: Vec<String>,
    /// Facts discovered by the checks.
    pub info: BTreeMap<String, String>,
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckReport {
    /// Create an empty, successful report.
    pub fn new() -> Self {
        Self {
            success: true,
            checks: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            info: BTreeMap::new(),
        }
    }

    /// Fold one check's outcome into the report.
    pub fn absorb(mut self, check: &str, outcome: CheckOutcome) -> Self {
        self.checks.push(check.to_string());
        self.warnings.extend(outcome.warnings);
        self.errors.extend(outcome.errors);
        self.info.extend(outcome.info);
        self.success = self.errors.is_empty();
        self
    }

    /// Look up a discovered fact.
    pub fn info(&self, key: &str) -> Option<&str> {
        self.info.get(key).map(String::as_str)
    }

    /// Number of checks counted as passed: checks run minus errors, floored at 0.
    pub fn passed_count(&self) -> usize {
        self.checks.len().saturating_sub(self.errors.len())
    }
}
