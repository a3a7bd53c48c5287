//! Tool status types reported by `doctor`.

use std::path::PathBuf;

/// Availability of a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Binary resolved on PATH.
    Found {
        path: PathBuf,
        /// `None` when `--version` failed or printed nothing recognizable.
        version: Option<String>,
    },

    /// Binary not found on any PATH entry.
    Missing { install_hint: Option<String> },
}

impl ToolStatus {
    pub fn is_found(&self) -> bool {
        matches!(self, ToolStatus::Found { .. })
    }
}

/// Result of checking one tool.
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub name: String,
    pub required: bool,
    pub status: ToolStatus,
}

/// All tool results from a doctor run.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    pub tools: Vec<ToolResult>,
}

impl DoctorReport {
    /// True when every required tool was found.
    pub fn is_healthy(&self) -> bool {
        self.tools
            .iter()
            .all(|tool| !tool.required || tool.status.is_found())
    }

    /// Names of required tools that are missing.
    pub fn missing_required(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|tool| tool.required && !tool.status.is_found())
            .map(|tool| tool.name.as_str())
            .collect()
    }

    /// Names of optional tools that are missing.
    pub fn missing_optional(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|tool| !tool.required && !tool.status.is_found())
            .map(|tool| tool.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, required: bool, found: bool) -> ToolResult {
        let status = if found {
            ToolStatus::Found {
                path: PathBuf::from(format!("/usr/bin/{name}")),
                version: None,
            }
        } else {
            ToolStatus::Missing { install_hint: None }
        };
        ToolResult {
            name: name.to_string(),
            required,
            status,
        }
    }

    #[test]
    fn healthy_ignores_missing_optional_tools() {
        let report = DoctorReport {
            tools: vec![result("cargo", true, true), result("wasm-opt", false, false)],
        };
        assert!(report.is_healthy());
        assert_eq!(report.missing_optional(), vec!["wasm-opt"]);
    }

    #[test]
    fn missing_required_tool_is_unhealthy() {
        let report = DoctorReport {
            tools: vec![result("cargo", true, true), result("wasm-pack", true, false)],
        };
        assert!(!report.is_healthy());
        assert_eq!(report.missing_required(), vec!["wasm-pack"]);
    }
}
