//! Toolchain requirement detection.
//!
//! - [`probe`] - PATH resolution and version probing
//! - [`status`] - Tool status and doctor report types
//! - [`checker`] - The known tool list and the checker that walks it

pub mod checker;
pub mod probe;
pub mod status;

pub use checker::{tool_spec, ToolChecker, ToolSpec, KNOWN_TOOLS};
pub use status::{DoctorReport, ToolResult, ToolStatus};
