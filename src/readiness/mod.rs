//! Deployment readiness checks.
//!
//! `zkwasm check` answers one question: is the built image present, intact,
//! and already registered in the remote catalog? Three checks run in order:
//!
//! 1. [`ArtifactCheck`] - the image and its declaration file exist
//! 2. [`DigestCheck`] - MD5 of the image, recorded for the next check
//! 3. [`CatalogCheck`] - the catalog knows an image with that digest
//!
//! Checks never fail the process. Each returns a [`CheckOutcome`] and the
//! [`ReadinessChecker`] folds them into a [`CheckReport`].
//!
//! # Example
//!
//! ```
//! use zkwasm_cli::readiness::{CheckOutcome, CheckReport};
//!
//! let mut outcome = CheckOutcome::new();
//! outcome.error("Missing build artifact");
//! let report = CheckReport::new().absorb("artifacts", outcome);
//! assert!(!report.success);
//! ```

pub mod artifact;
pub mod catalog;
pub mod digest;
pub mod report;
pub mod runner;
pub mod summary;

pub use artifact::ArtifactCheck;
pub use catalog::{CatalogCheck, CatalogClient, CatalogImage, CatalogResponse, HttpCatalog};
pub use digest::{digest_file, md5_hex, DigestCheck};
pub use report::{keys, CheckOutcome, CheckReport};
pub use runner::ReadinessChecker;

/// A single step of the readiness pipeline.
pub trait ReadinessCheck {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// Run the check against the report accumulated so far.
    fn run(&self, report: &CheckReport) -> CheckOutcome;
}
