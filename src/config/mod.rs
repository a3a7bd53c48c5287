//! Configuration loading and schema.
//!
//! - [`schema`] - Typed configuration with defaults
//! - [`loader`] - File discovery, layering and environment overrides
//! - [`merger`] - YAML deep merge

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    apply_env_overrides, find_project_root, load_merged_config, load_project_config,
    project_config_path, validate_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{BuildConfig, CatalogConfig, ZkwasmConfig};
