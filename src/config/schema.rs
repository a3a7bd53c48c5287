//! Configuration schema types.
//!
//! These types define the structure of `.zkwasm/config.yml`. Every field has
//! a default so a partial (or absent) file still yields a usable config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default directory the build writes artifacts into.
pub const DEFAULT_OUTPUT_DIR: &str = "build-artifact";

/// Default file stem of the compiled image.
pub const DEFAULT_ARTIFACT: &str = "application_bg";

/// Default catalog base URL.
pub const DEFAULT_CATALOG_URL: &str = "https://rpc.zkwasmhub.com:8090";

/// Default catalog path for image lookups.
pub const DEFAULT_CATALOG_PATH: &str = "/image";

/// Default catalog request timeout in seconds.
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

/// Root project configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZkwasmConfig {
    /// Application name shown in headers.
    pub app_name: Option<String>,

    /// Directory (relative to the project root) the build writes into.
    pub output_dir: PathBuf,

    /// File stem of the compiled image inside `<output_dir>/application/`.
    pub artifact: String,

    /// Remote image catalog settings.
    pub catalog: CatalogConfig,

    /// Build settings.
    pub build: BuildConfig,

    /// Extra tools `zkwasm doctor` should treat as required.
    pub requires: Vec<String>,
}

impl Default for ZkwasmConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            artifact: DEFAULT_ARTIFACT.to_string(),
            catalog: CatalogConfig::default(),
            build: BuildConfig::default(),
            requires: Vec::new(),
        }
    }
}

impl ZkwasmConfig {
    /// Directory holding the compiled image and its declaration file.
    pub fn application_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output_dir).join("application")
    }

    /// Path of the compiled wasm image.
    pub fn wasm_path(&self, project_root: &Path) -> PathBuf {
        self.application_dir(project_root)
            .join(format!("{}.wasm", self.artifact))
    }

    /// Path of the companion type-declaration file.
    pub fn declaration_path(&self, project_root: &Path) -> PathBuf {
        self.application_dir(project_root)
            .join(format!("{}.wasm.d.ts", self.artifact))
    }
}

/// Remote image catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the catalog service.
    pub url: String,

    /// Path of the image lookup endpoint.
    pub path: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            path: DEFAULT_CATALOG_PATH.to_string(),
            timeout_secs: DEFAULT_CATALOG_TIMEOUT_SECS,
        }
    }
}

impl CatalogConfig {
    /// Full URL of the lookup endpoint, without query string.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Build settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Shell commands run in order by `zkwasm build`.
    pub commands: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            commands: vec![format!(
                "wasm-pack build --release --out-name application --out-dir {}/application",
                DEFAULT_OUTPUT_DIR
            )],
        }
    }
}
