//! Integration tests for the config module public API.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use zkwasm_cli::config::{
    apply_env_overrides, find_project_root, load_merged_config, load_project_config,
    ZkwasmConfig,
};
use zkwasm_cli::ZkwasmError;

#[test]
fn defaults_point_at_wasm_pack_output() {
    let config = ZkwasmConfig::default();
    let root = PathBuf::from("/work/app");

    assert_eq!(
        config.wasm_path(&root),
        PathBuf::from("/work/app/build-artifact/application/application_bg.wasm")
    );
    assert_eq!(
        config.declaration_path(&root),
        PathBuf::from("/work/app/build-artifact/application/application_bg.wasm.d.ts")
    );
}

#[test]
fn local_config_overrides_project_config() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".zkwasm");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.yml"),
        "app_name: demo\ncatalog:\n  url: https://hub.example\n  timeout_secs: 5\n",
    )
    .unwrap();
    fs::write(dir.join("config.local.yml"), "catalog:\n  url: http://localhost:8090\n").unwrap();

    let config = load_project_config(temp.path()).unwrap();

    assert_eq!(config.app_name.as_deref(), Some("demo"));
    assert_eq!(config.catalog.url, "http://localhost:8090");
    assert_eq!(config.catalog.timeout_secs, 5);
}

#[test]
fn missing_config_is_not_a_project() {
    let temp = TempDir::new().unwrap();

    let err = load_project_config(temp.path()).unwrap_err();
    assert!(matches!(err, ZkwasmError::NotAProject { .. }));

    let defaults = load_merged_config(temp.path()).unwrap();
    assert_eq!(defaults.artifact, "application_bg");
}

#[test]
fn project_root_found_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".zkwasm")).unwrap();
    fs::write(temp.path().join(".zkwasm/config.yml"), "").unwrap();
    let nested = temp.path().join("src/nested");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
}

#[test]
fn env_overrides_apply() {
    let mut config = ZkwasmConfig::default();
    apply_env_overrides(&mut config, |key| match key {
        "ZKWASM_OUTPUT_DIR" => Ok("dist".to_string()),
        _ => Err(std::env::VarError::NotPresent),
    })
    .unwrap();

    assert_eq!(config.output_dir, PathBuf::from("dist"));
}
