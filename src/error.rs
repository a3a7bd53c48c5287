//! Error types for zkwasm operations.
//!
//! This module defines [`ZkwasmError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Readiness checks never return errors; they record strings in a
//!   [`CheckReport`](crate::readiness::CheckReport)
//! - Use `ZkwasmError` for failures that stop a command from running at all
//! - Use `anyhow::Error` (via `ZkwasmError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for zkwasm operations.
#[derive(Debug, Error)]
pub enum ZkwasmError {
    /// Directory does not look like a zkwasm project.
    #[error("Not a zkwasm project: {path} (missing .zkwasm/config.yml)")]
    NotAProject { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Embedded template is missing or malformed.
    #[error("Template error: {message}")]
    TemplateError { message: String },

    /// Target directory for a new project is not empty.
    #[error("Directory already exists and is not empty: {path}")]
    DirectoryNotEmpty { path: PathBuf },

    /// Shell command could not be started.
    #[error("Failed to start command '{command}': {message}")]
    CommandSpawnFailed { command: String, message: String },

    /// Remote catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status} for {url}")]
    CatalogStatus { status: u16, url: String },

    /// Remote catalog could not be reached or its response could not be read.
    #[error("Catalog request failed: {message}")]
    CatalogRequest { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZkwasmError {
    /// Process exit code for a command that stopped with this error.
    ///
    /// 2 means the command could not run at all, 1 means it ran and failed.
    pub fn exit_code(&self) -> i32 {
        match self {
            ZkwasmError::NotAProject { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for zkwasm operations.
pub type Result<T> = std::result::Result<T, ZkwasmError>;
