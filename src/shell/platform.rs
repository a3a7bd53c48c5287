//! Platform-specific shell detection.

use std::path::PathBuf;

/// Shell used to run configured build commands.
pub fn shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        std::env::var("SHELL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/bin/sh"))
    }
}

/// Flag that makes the shell execute a command string.
///
/// A login shell is used on Unix so toolchains installed through
/// profile scripts (rustup, nvm) are on PATH.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with(|key| std::env::var(key))
}

/// Check for CI markers using a custom environment lookup.
pub fn is_ci_with<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    const MARKERS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
    ];
    MARKERS.iter().any(|key| env_fn(key).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    #[test]
    fn ci_detected_from_marker() {
        let env = |key: &str| {
            if key == "GITHUB_ACTIONS" {
                Ok("true".to_string())
            } else {
                Err(VarError::NotPresent)
            }
        };
        assert!(is_ci_with(env));
    }

    #[test]
    fn no_markers_is_not_ci() {
        assert!(!is_ci_with(|_| Err(VarError::NotPresent)));
    }

    #[cfg(unix)]
    #[test]
    fn unix_uses_login_flag() {
        assert_eq!(shell_flag(), "-lc");
    }
}
