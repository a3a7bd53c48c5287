//! Project scaffolding for `zkwasm init`.

mod template;

pub use template::{
    crate_name_for, destination_path, EmbeddedTemplate, TemplateVars, DEFAULT_TEMPLATE,
};

use std::path::{Path, PathBuf};

use crate::config::load_project_config;
use crate::error::{Result, ZkwasmError};

/// Writes a new project into a directory.
pub trait ProjectScaffolder {
    /// Write the project files into `target`, returning the relative paths written.
    fn scaffold(&self, target: &Path, vars: &TemplateVars) -> Result<Vec<PathBuf>>;
}

/// Check that `name` is usable as a package and directory name.
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(ZkwasmError::ConfigValidationError {
            message: format!("Invalid project name '{}': {}", name, reason),
        })
    };

    let Some(first) = name.chars().next() else {
        return invalid("name is empty");
    };
    if !first.is_ascii_alphabetic() {
        return invalid("must start with a letter");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return invalid("only letters, digits, '-' and '_' are allowed");
    }
    Ok(())
}

/// Create a project at `target`.
///
/// Fails with `DirectoryNotEmpty` when `target` has entries unless `force`.
pub fn init_project(
    scaffolder: &dyn ProjectScaffolder,
    target: &Path,
    vars: &TemplateVars,
    force: bool,
) -> Result<Vec<PathBuf>> {
    validate_project_name(&vars.name)?;

    if target.is_file() {
        return Err(ZkwasmError::DirectoryNotEmpty {
            path: target.to_path_buf(),
        });
    }
    if target.is_dir() && !force && std::fs::read_dir(target)?.next().is_some() {
        return Err(ZkwasmError::DirectoryNotEmpty {
            path: target.to_path_buf(),
        });
    }

    std::fs::create_dir_all(target)?;
    let written = scaffolder.scaffold(target, vars)?;

    // The generated config must load, or the project is unusable.
    load_project_config(target)?;

    tracing::debug!("Scaffolded {} files into {}", written.len(), target.display());
    Ok(written)
}
