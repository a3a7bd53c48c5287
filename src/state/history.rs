//! Deployment history records.
//!
//! Each `zkwasm check` run produces one [`DeploymentRecord`] summarizing
//! the readiness report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::readiness::{keys, CheckReport};

/// Summary of a single readiness run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// When the run started.
    pub timestamp: DateTime<Utc>,

    /// Image digest, if one was computed.
    pub md5: Option<String>,

    /// Image name reported by the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,

    /// Whether the project was ready to deploy.
    pub success: bool,

    /// Number of checks that ran.
    pub checks: usize,
    /// Number of warnings reported.
    pub warnings: usize,
    /// Number of errors reported.
    pub errors: usize,

    /// Total duration in milliseconds.
    pub duration_ms: u64,

    /// First error message, if the run failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_error: Option<String>,
}

impl DeploymentRecord {
    /// Summarize a finished report.
    pub fn from_report(report: &CheckReport, started: DateTime<Utc>) -> Self {
        let duration_ms = (Utc::now() - started).num_milliseconds().max(0) as u64;
        Self {
            timestamp: started,
            md5: report.info(keys::MD5_HASH).map(String::from),
            image_name: report.info(keys::IMAGE_NAME).map(String::from),
            success: report.success,
            checks: report.checks.len(),
            warnings: report.warnings.len(),
            errors: report.errors.len(),
            duration_ms,
            first_error: report.errors.first().cloned(),
        }
    }

    /// "ready" or "not ready".
    pub fn status_label(&self) -> &'static str {
        if self.success {
            "ready"
        } else {
            "not ready"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::CheckOutcome;

    #[test]
    fn record_from_successful_report() {
        let mut digest = CheckOutcome::new();
        digest.record(keys::MD5_HASH, "D41D8CD98F00B204E9800998ECF8427E");
        let mut catalog = CheckOutcome::new();
        catalog.record(keys::IMAGE_NAME, "demo");
        let report = CheckReport::new()
            .absorb("integrity", digest)
            .absorb("catalog", catalog);

        let record = DeploymentRecord::from_report(&report, Utc::now());

        assert!(record.success);
        assert_eq!(record.md5.as_deref(), Some("D41D8CD98F00B204E9800998ECF8427E"));
        assert_eq!(record.image_name.as_deref(), Some("demo"));
        assert_eq!(record.checks, 2);
        assert_eq!(record.first_error, None);
        assert_eq!(record.status_label(), "ready");
    }

    #[test]
    fn record_from_failed_report_keeps_first_error() {
        let mut artifacts = CheckOutcome::new();
        artifacts.error("Missing build artifact: a");
        artifacts.error("Missing build artifact: b");
        let report = CheckReport::new().absorb("artifacts", artifacts);

        let record = DeploymentRecord::from_report(&report, Utc::now());

        assert!(!record.success);
        assert_eq!(record.errors, 2);
        assert_eq!(record.md5, None);
        assert_eq!(record.first_error.as_deref(), Some("Missing build artifact: a"));
        assert_eq!(record.status_label(), "not ready");
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let report = CheckReport::new();
        let record = DeploymentRecord::from_report(&report, Utc::now());
        let json = serde_json::to_string(&record).unwrap();

        assert!(!json.contains("image_name"));
        assert!(!json.contains("first_error"));
        assert!(json.contains("\"md5\":null"));
    }
}
