//! zkwasm - scaffolding and deployment readiness for zkWasm applications.
//!
//! The core of the crate is the readiness checker behind `zkwasm check`:
//! it confirms the compiled WebAssembly image exists, computes its MD5
//! digest and asks the remote image catalog whether that image has been
//! published.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading and layering
//! - [`error`] - Error types and result aliases
//! - [`readiness`] - Artifact, digest and catalog checks
//! - [`requirements`] - Toolchain detection for `doctor`
//! - [`scaffold`] - Project templates for `init`
//! - [`shell`] - Shell command execution
//! - [`state`] - Deployment history
//! - [`ui`] - Prompts, spinners, and terminal output
//! - [`validate`] - Project structure validation
//!
//! # Example
//!
//! ```
//! use zkwasm_cli::readiness::md5_hex;
//!
//! assert_eq!(md5_hex(b""), "D41D8CD98F00B204E9800998ECF8427E");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod readiness;
pub mod requirements;
pub mod scaffold;
pub mod shell;
pub mod state;
pub mod ui;
pub mod validate;

pub use error::{Result, ZkwasmError};
