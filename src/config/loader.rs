//! Configuration file discovery and loading.
//!
//! Merge order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (`.zkwasm/config.yml`)
//! 3. Local overrides (`.zkwasm/config.local.yml`)
//! 4. Environment variables (`ZKWASM_*`)

use crate::config::merger::merge_configs;
use crate::config::schema::ZkwasmConfig;
use crate::error::{Result, ZkwasmError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project-level zkwasm files.
pub const CONFIG_DIR: &str = ".zkwasm";

/// Environment variable overriding the catalog base URL.
pub const ENV_CATALOG_URL: &str = "ZKWASM_CATALOG_URL";

/// Environment variable overriding the artifact output directory.
pub const ENV_OUTPUT_DIR: &str = "ZKWASM_OUTPUT_DIR";

/// Environment variable overriding the catalog timeout (seconds).
pub const ENV_CATALOG_TIMEOUT: &str = "ZKWASM_CATALOG_TIMEOUT";

/// Paths to configuration files for a project.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .zkwasm/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .zkwasm/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_config_path(project_root)),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Location of the main project config, whether or not it exists.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join("config.yml")
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.zkwasm` directory first and falls back to a `Cargo.toml`
/// sitting next to a `ts/` directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join("Cargo.toml").is_file() && current.join("ts").is_dir() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;

    // An empty file parses to null; treat it as an empty mapping.
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| ZkwasmError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project config, falling back to defaults.
///
/// A project without any config file gets [`ZkwasmConfig::default`] with
/// environment overrides applied.
pub fn load_merged_config(project_root: &Path) -> Result<ZkwasmConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut values = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        values.push(load_config_value(path)?);
    }

    let merged = merge_configs(&values);
    let mut config: ZkwasmConfig =
        serde_yaml::from_value(merged).map_err(|e| ZkwasmError::ConfigParseError {
            path: project_config_path(project_root),
            message: format!("Failed to parse merged config: {}", e),
        })?;
    validate_config(&config)?;

    apply_env_overrides(&mut config, |key| std::env::var(key))?;
    Ok(config)
}

/// Reject values that would make every command using them fail.
pub fn validate_config(config: &ZkwasmConfig) -> Result<()> {
    if config.catalog.timeout_secs == 0 {
        return Err(ZkwasmError::ConfigValidationError {
            message: "catalog.timeout_secs must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Load config, requiring that the project config file exists.
pub fn load_project_config(project_root: &Path) -> Result<ZkwasmConfig> {
    if !ConfigPaths::discover(project_root).has_project_config() {
        return Err(ZkwasmError::NotAProject {
            path: project_root.to_path_buf(),
        });
    }
    load_merged_config(project_root)
}

/// Apply `ZKWASM_*` environment overrides using a custom lookup function.
pub fn apply_env_overrides<F>(config: &mut ZkwasmConfig, env_fn: F) -> Result<()>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Ok(url) = env_fn(ENV_CATALOG_URL) {
        config.catalog.url = url;
    }

    if let Ok(dir) = env_fn(ENV_OUTPUT_DIR) {
        config.output_dir = PathBuf::from(dir);
    }

    if let Ok(raw) = env_fn(ENV_CATALOG_TIMEOUT) {
        let secs: u64 = raw
            .trim()
            .parse()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ZkwasmError::ConfigValidationError {
                message: format!(
                    "{} must be a positive number of seconds, got '{}'",
                    ENV_CATALOG_TIMEOUT, raw
                ),
            })?;
        config.catalog.timeout_secs = secs;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, content: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> std::result::Result<String, std::env::VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn discover_finds_project_and_local() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "app_name: a\n");
        write_config(temp.path(), "config.local.yml", "app_name: b\n");

        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.has_project_config());
        assert_eq!(paths.all_existing().len(), 2);
    }

    #[test]
    fn discover_empty_directory() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(!paths.has_project_config());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn local_config_overrides_project() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "config.yml",
            "app_name: demo\ncatalog:\n  url: https://hub.one\n  timeout_secs: 3\n",
        );
        write_config(temp.path(), "config.local.yml", "catalog:\n  url: http://localhost:9000\n");

        let paths = ConfigPaths::discover(temp.path());
        let values: Vec<_> = paths
            .all_existing()
            .into_iter()
            .map(|p| load_config_value(p).unwrap())
            .collect();
        let config: ZkwasmConfig = serde_yaml::from_value(merge_configs(&values)).unwrap();

        assert_eq!(config.app_name.as_deref(), Some("demo"));
        assert_eq!(config.catalog.url, "http://localhost:9000");
        assert_eq!(config.catalog.timeout_secs, 3);
    }

    #[test]
    fn missing_config_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let mut config = ZkwasmConfig::default();
        apply_env_overrides(&mut config, env_from(&[])).unwrap();
        assert_eq!(config, ZkwasmConfig::default());
        assert!(matches!(
            load_project_config(temp.path()),
            Err(ZkwasmError::NotAProject { .. })
        ));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "catalog: [unclosed\n");
        let result = load_merged_config(temp.path());
        assert!(matches!(result, Err(ZkwasmError::ConfigParseError { .. })));
    }

    #[test]
    fn empty_file_is_empty_mapping() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "");
        let value = load_config_value(&project_config_path(temp.path())).unwrap();
        assert!(value.as_mapping().is_some());
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = ZkwasmConfig::default();
        apply_env_overrides(
            &mut config,
            env_from(&[
                (ENV_CATALOG_URL, "http://127.0.0.1:1"),
                (ENV_OUTPUT_DIR, "out"),
                (ENV_CATALOG_TIMEOUT, "42"),
            ]),
        )
        .unwrap();

        assert_eq!(config.catalog.url, "http://127.0.0.1:1");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.catalog.timeout_secs, 42);
    }

    #[test]
    fn env_timeout_must_be_numeric() {
        let mut config = ZkwasmConfig::default();
        let result = apply_env_overrides(&mut config, env_from(&[(ENV_CATALOG_TIMEOUT, "soon")]));
        assert!(matches!(
            result,
            Err(ZkwasmError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn env_timeout_rejects_zero() {
        let mut config = ZkwasmConfig::default();
        let result = apply_env_overrides(&mut config, env_from(&[(ENV_CATALOG_TIMEOUT, "0")]));
        assert!(matches!(
            result,
            Err(ZkwasmError::ConfigValidationError { .. })
        ));
        assert_eq!(config.catalog.timeout_secs, ZkwasmConfig::default().catalog.timeout_secs);
    }

    #[test]
    fn zero_timeout_in_config_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "catalog:\n  timeout_secs: 0\n");

        let result = load_merged_config(temp.path());

        match result {
            Err(ZkwasmError::ConfigValidationError { message }) => {
                assert!(message.contains("timeout_secs"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn find_project_root_walks_up() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "");
        let nested = temp.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_accepts_cargo_and_ts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[package]\n").unwrap();
        fs::create_dir_all(temp.path().join("ts")).unwrap();

        assert_eq!(
            find_project_root(temp.path()),
            Some(temp.path().to_path_buf())
        );
    }
}
