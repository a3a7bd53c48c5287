//! PATH probing for toolchain binaries.
//!
//! Tools are resolved by walking PATH entries directly. The `which`
//! command is not used: it is sometimes a shell builtin and its exit
//! codes differ across systems.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::shell::run_program;

/// First dotted version number in a `--version` banner.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.\d+(?:\.\d+)?(?:-[0-9A-Za-z.]+)?)").expect("VERSION_REGEX must compile")
});

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names: Vec<String> = if cfg!(target_os = "windows") {
        vec![format!("{tool}.exe"), format!("{tool}.cmd"), tool.to_string()]
    } else {
        vec![tool.to_string()]
    };

    path_entries.iter().find_map(|dir| {
        names
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file() && is_executable(candidate))
    })
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Extract a version number from `--version` output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Run `<binary> --version` and extract the reported version.
pub fn probe_version(binary: &Path) -> Option<String> {
    let result = run_program(binary, &["--version"])?;
    if !result.success {
        tracing::debug!("{} --version exited with {:?}", binary.display(), result.exit_code);
        return None;
    }
    extract_version(&result.stdout).or_else(|| extract_version(&result.stderr))
}
