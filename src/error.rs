//! Error types for paramkit operations.
//!
//! This module defines [`ParamkitError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ParamkitError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ParamkitError::Other`) for unexpected errors
//! - The readiness check never lets an error escape: every failure is folded
//!   into a displayed report

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for paramkit operations.
#[derive(Debug, Error)]
pub enum ParamkitError {
    /// The toolkit path variable is unset or empty.
    #[error(
        "Toolkit path not set.\n\nIn your shell, run:\n  export {variable}=\"/path/to/toolkit\"\n\nthen relaunch from that same shell."
    )]
    MissingVariable { variable: String },

    /// The toolkit path variable points at a missing or unreadable directory.
    #[error("Toolkit path not found: {path} is not a readable directory")]
    PathNotFound { path: PathBuf },

    /// A tool module could not be loaded.
    #[error("Failed to load tool module '{module}': {message}")]
    ImportFailure { module: String, message: String },

    /// Failed to parse a tool manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Manifest requires a toolkit version this build does not satisfy.
    #[error("Tool '{tool}' requires toolkit {required}, but this is {current}")]
    IncompatibleToolkit {
        tool: String,
        required: String,
        current: String,
    },

    /// Manifest names an entry point with no built-in implementation.
    #[error("Manifest {path} names unknown entry point '{entry}'")]
    UnknownEntry { path: PathBuf, entry: String },

    /// Two manifests declare the same tool name.
    #[error("Duplicate tool name '{name}' (second declaration at {path})")]
    DuplicateTool { name: String, path: PathBuf },

    /// Requested tool is not in the registry.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Tool parameters failed validation.
    #[error("Invalid parameters for '{tool}': {message}")]
    InvalidParams { tool: String, message: String },

    /// Tool execution failed.
    #[error("Tool '{tool}' failed: {message}")]
    ToolFailed { tool: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for paramkit operations.
pub type Result<T> = std::result::Result<T, ParamkitError>;
