//! Sequential readiness pipeline.

use std::path::Path;

use crate::config::ZkwasmConfig;
use crate::error::Result;

use super::artifact::ArtifactCheck;
use super::catalog::{CatalogCheck, CatalogClient, HttpCatalog};
use super::digest::DigestCheck;
use super::report::CheckReport;
use super::ReadinessCheck;

/// Runs the readiness checks in order and folds their outcomes.
///
/// Each check sees the report as it stood after the previous checks, so the
/// catalog check can read the digest recorded by the integrity check.
pub struct ReadinessChecker {
    checks: Vec<Box<dyn ReadinessCheck>>,
}

impl ReadinessChecker {
    /// Create a checker from an explicit list of checks.
    pub fn new(checks: Vec<Box<dyn ReadinessCheck>>) -> Self {
        Self { checks }
    }

    /// The standard artifact → integrity → catalog pipeline.
    pub fn standard(
        project_root: &Path,
        config: &ZkwasmConfig,
        catalog: Box<dyn CatalogClient>,
        verbose: bool,
    ) -> Self {
        let wasm_path = config.wasm_path(project_root);
        Self::new(vec![
            Box::new(ArtifactCheck::new(
                wasm_path.clone(),
                config.declaration_path(project_root),
                verbose,
            )),
            Box::new(DigestCheck::new(wasm_path)),
            Box::new(CatalogCheck::new(catalog)),
        ])
    }

    /// The standard pipeline against the configured HTTP catalog.
    pub fn for_project(project_root: &Path, config: &ZkwasmConfig, verbose: bool) -> Result<Self> {
        let catalog = HttpCatalog::new(&config.catalog)?;
        Ok(Self::standard(
            project_root,
            config,
            Box::new(catalog),
            verbose,
        ))
    }

    /// Names of the checks in run order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run every check in sequence.
    pub fn run(&self) -> CheckReport {
        self.checks.iter().fold(CheckReport::new(), |report, check| {
            tracing::debug!("Running readiness check '{}'", check.name());
            let outcome = check.run(&report);
            report.absorb(check.name(), outcome)
        })
    }
}
