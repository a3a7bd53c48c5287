//! Toolchain checker behind `zkwasm doctor`.

use std::collections::HashMap;
use std::path::PathBuf;

use super::probe::{parse_system_path, probe_version, resolve_tool_path};
use super::status::{DoctorReport, ToolResult, ToolStatus};

/// A tool the checker knows about.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub required: bool,
    pub install_hint: &'static str,
}

/// Tools needed to build and ship a zkWasm application.
pub const KNOWN_TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "cargo",
        required: true,
        install_hint: "Install Rust via https://rustup.rs",
    },
    ToolSpec {
        name: "rustc",
        required: true,
        install_hint: "Install Rust via https://rustup.rs",
    },
    ToolSpec {
        name: "wasm-pack",
        required: true,
        install_hint: "cargo install wasm-pack",
    },
    ToolSpec {
        name: "node",
        required: true,
        install_hint: "Install Node.js from https://nodejs.org",
    },
    ToolSpec {
        name: "npm",
        required: true,
        install_hint: "npm ships with Node.js",
    },
    ToolSpec {
        name: "wasm-opt",
        required: false,
        install_hint: "Install binaryen (provides wasm-opt)",
    },
    ToolSpec {
        name: "git",
        required: false,
        install_hint: "Install git from https://git-scm.com",
    },
];

/// Look up a known tool by name.
pub fn tool_spec(name: &str) -> Option<&'static ToolSpec> {
    KNOWN_TOOLS.iter().find(|spec| spec.name == name)
}

/// Resolves tools on PATH and probes their versions.
///
/// Results are cached per run so a tool listed twice is only probed once.
pub struct ToolChecker {
    path_entries: Vec<PathBuf>,
    cache: HashMap<String, ToolStatus>,
}

impl ToolChecker {
    /// Checker using the process PATH.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Checker using explicit PATH entries.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            cache: HashMap::new(),
        }
    }

    /// Check a single tool.
    pub fn check_one(&mut self, name: &str) -> ToolStatus {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }

        let status = match resolve_tool_path(name, &self.path_entries) {
            Some(path) => {
                let version = probe_version(&path);
                tracing::debug!("Found {} at {} ({:?})", name, path.display(), version);
                ToolStatus::Found { path, version }
            }
            None => {
                tracing::debug!("{} not found on PATH", name);
                ToolStatus::Missing {
                    install_hint: tool_spec(name).map(|spec| spec.install_hint.to_string()),
                }
            }
        };

        self.cache.insert(name.to_string(), status.clone());
        status
    }

    /// Check the built-in tool list plus `extra_required` from project config.
    ///
    /// An extra tool that is already known becomes required.
    pub fn check_all(&mut self, extra_required: &[String]) -> DoctorReport {
        let mut wanted: Vec<(String, bool)> = KNOWN_TOOLS
            .iter()
            .map(|spec| (spec.name.to_string(), spec.required))
            .collect();

        for extra in extra_required {
            match wanted.iter_mut().find(|(name, _)| name == extra) {
                Some(entry) => entry.1 = true,
                None => wanted.push((extra.clone(), true)),
            }
        }

        let tools = wanted
            .into_iter()
            .map(|(name, required)| ToolResult {
                status: self.check_one(&name),
                name,
                required,
            })
            .collect();

        DoctorReport { tools }
    }
}

impl Default for ToolChecker {
    fn default() -> Self {
        Self::new()
    }
}
