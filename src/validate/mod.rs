//! Project structure validation for `zkwasm validate`.
//!
//! Each structural rule is a [`ReadinessCheck`], so validation runs
//! through the same runner and report as `zkwasm check`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::{load_merged_config, project_config_path, CONFIG_DIR};
use crate::readiness::{CheckOutcome, CheckReport, ReadinessCheck, ReadinessChecker};

/// `.zkwasm/config.yml` exists, parses, and has runnable build commands.
pub struct ConfigFileCheck {
    root: PathBuf,
}

impl ConfigFileCheck {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl ReadinessCheck for ConfigFileCheck {
    fn name(&self) -> &'static str {
        "config"
    }

    fn run(&self, _report: &CheckReport) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();
        let path = project_config_path(&self.root);

        if !path.is_file() {
            outcome.error(format!(
                "Missing {}/config.yml (run `zkwasm init` to create a project)",
                CONFIG_DIR
            ));
            return outcome;
        }

        let config = match load_merged_config(&self.root) {
            Ok(config) => config,
            Err(e) => {
                outcome.error(format!("Invalid project config: {}", e));
                return outcome;
            }
        };

        if config.build.commands.is_empty() {
            outcome.error("No build commands configured under build.commands");
        } else if config.build.commands.iter().any(|c| c.trim().is_empty()) {
            outcome.error("build.commands contains an empty command");
        }

        if config.app_name.is_none() {
            outcome.warn("app_name is not set in the project config");
        }

        outcome
    }
}

/// The parts of a Cargo manifest the manifest check reads.
#[derive(Debug, Default, Deserialize)]
struct CargoManifest {
    #[serde(default)]
    lib: Option<LibTarget>,
}

#[derive(Debug, Default, Deserialize)]
struct LibTarget {
    #[serde(default, rename = "crate-type")]
    crate_type: Vec<String>,
}

impl CargoManifest {
    fn builds_cdylib(&self) -> bool {
        self.lib
            .as_ref()
            .is_some_and(|lib| lib.crate_type.iter().any(|t| t == "cdylib"))
    }
}

/// `Cargo.toml` exists and its `[lib]` builds a `cdylib`.
pub struct ManifestCheck {
    root: PathBuf,
}

impl ManifestCheck {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl ReadinessCheck for ManifestCheck {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn run(&self, _report: &CheckReport) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();
        let path = self.root.join("Cargo.toml");

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                outcome.error("Missing Cargo.toml in project root");
                return outcome;
            }
            Err(e) => {
                outcome.error(format!("Cannot read Cargo.toml: {}", e));
                return outcome;
            }
        };

        match toml::from_str::<CargoManifest>(&content) {
            Ok(manifest) if manifest.builds_cdylib() => {}
            Ok(_) => outcome.error(
                "Cargo.toml does not declare lib.crate-type \"cdylib\" (required for wasm-pack)",
            ),
            Err(e) => outcome.error(format!("Cargo.toml is not valid TOML: {}", e.message())),
        }

        outcome
    }
}

/// `src/lib.rs` exists.
pub struct SourceCheck {
    root: PathBuf,
}

impl SourceCheck {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl ReadinessCheck for SourceCheck {
    fn name(&self) -> &'static str {
        "source"
    }

    fn run(&self, _report: &CheckReport) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();
        if !self.root.join("src").join("lib.rs").is_file() {
            outcome.error("Missing src/lib.rs");
        }
        outcome
    }
}

/// The TypeScript client. Problems here are warnings only.
pub struct ClientCheck {
    root: PathBuf,
}

impl ClientCheck {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl ReadinessCheck for ClientCheck {
    fn name(&self) -> &'static str {
        "client"
    }

    fn run(&self, _report: &CheckReport) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();
        let path = self.root.join("ts").join("package.json");

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                if let Err(e) = serde_json::from_str::<serde_json::Value>(&content) {
                    outcome.warn(format!("ts/package.json is not valid JSON: {}", e));
                }
            }
            Err(_) => outcome.warn("Missing ts/package.json (TypeScript client)"),
        }

        outcome
    }
}

/// The checker that validates a project's structure.
pub fn structure_checker(root: &Path) -> ReadinessChecker {
    ReadinessChecker::new(vec![
        Box::new(ConfigFileCheck::new(root)),
        Box::new(ManifestCheck::new(root)),
        Box::new(SourceCheck::new(root)),
        Box::new(ClientCheck::new(root)),
    ])
}

/// Validate the project at `root`.
pub fn validate_project(root: &Path) -> CheckReport {
    structure_checker(root).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = "app_name: demo\nbuild:\n  commands:\n    - wasm-pack build --release\n";
    const MANIFEST: &str =
        "[package]\nname = \"demo\"\n\n[lib]\ncrate-type = [\"cdylib\", \"rlib\"]\n";

    fn valid_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join(".zkwasm")).unwrap();
        fs::write(root.join(".zkwasm/config.yml"), CONFIG).unwrap();
        fs::write(root.join("Cargo.toml"), MANIFEST).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/lib.rs"), "").unwrap();
        fs::create_dir_all(root.join("ts")).unwrap();
        fs::write(root.join("ts/package.json"), "{\"name\": \"demo-ts\"}").unwrap();
        temp
    }

    #[test]
    fn valid_project_passes_all_checks() {
        let temp = valid_project();
        let report = validate_project(temp.path());

        assert!(report.success, "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty());
        assert_eq!(report.checks, vec!["config", "manifest", "source", "client"]);
    }

    #[test]
    fn empty_directory_reports_each_problem() {
        let temp = TempDir::new().unwrap();
        let report = validate_project(temp.path());

        assert!(!report.success);
        assert_eq!(report.errors.len(), 3);
        assert!(report.errors[0].contains(".zkwasm/config.yml"));
        assert!(report.errors[1].contains("Cargo.toml"));
        assert!(report.errors[2].contains("src/lib.rs"));
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn missing_client_is_only_a_warning() {
        let temp = valid_project();
        fs::remove_file(temp.path().join("ts/package.json")).unwrap();

        let report = validate_project(temp.path());

        assert!(report.success);
        assert!(report.warnings[0].contains("ts/package.json"));
    }

    #[test]
    fn manifest_without_cdylib_fails() {
        let temp = valid_project();
        fs::write(
            temp.path().join("Cargo.toml"),
            "[package]\nname = \"demo\"\n",
        )
        .unwrap();

        let report = validate_project(temp.path());

        assert!(!report.success);
        assert!(report.errors[0].contains("cdylib"));
    }

    #[test]
    fn commented_out_cdylib_is_not_accepted() {
        let temp = valid_project();
        fs::write(
            temp.path().join("Cargo.toml"),
            "[package]\nname = \"demo\"\n\n[lib]\n# crate-type = [\"cdylib\"]\ncrate-type = [\"rlib\"]\n",
        )
        .unwrap();

        let outcome = ManifestCheck::new(temp.path()).run(&CheckReport::new());

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("lib.crate-type"));
    }

    #[test]
    fn cdylib_outside_lib_table_is_not_accepted() {
        let temp = valid_project();
        fs::write(
            temp.path().join("Cargo.toml"),
            "[package]\nname = \"demo\"\n\n[package.metadata.build]\ncrate-type = [\"cdylib\"]\n",
        )
        .unwrap();

        let outcome = ManifestCheck::new(temp.path()).run(&CheckReport::new());

        assert_eq!(outcome.errors.len(), 1);
    }

    #[test]
    fn malformed_manifest_is_reported_as_parse_error() {
        let temp = valid_project();
        fs::write(temp.path().join("Cargo.toml"), "[lib\ncrate-type = [\"cdylib\"]\n").unwrap();

        let outcome = ManifestCheck::new(temp.path()).run(&CheckReport::new());

        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].starts_with("Cargo.toml is not valid TOML"));
    }

    #[test]
    fn empty_build_commands_fail() {
        let temp = valid_project();
        fs::write(
            temp.path().join(".zkwasm/config.yml"),
            "app_name: demo\nbuild:\n  commands: []\n",
        )
        .unwrap();

        let report = validate_project(temp.path());

        assert!(!report.success);
        assert!(report.errors[0].contains("No build commands"));
    }

    #[test]
    fn unparsable_config_fails() {
        let temp = valid_project();
        fs::write(temp.path().join(".zkwasm/config.yml"), "output_dir: [unclosed").unwrap();

        let report = validate_project(temp.path());

        assert!(!report.success);
        assert!(report.errors[0].starts_with("Invalid project config"));
    }

    #[test]
    fn invalid_package_json_warns() {
        let temp = valid_project();
        fs::write(temp.path().join("ts/package.json"), "{ nope").unwrap();

        let report = validate_project(temp.path());

        assert!(report.success);
        assert!(report.warnings[0].contains("not valid JSON"));
    }
}
