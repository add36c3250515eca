//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Subprocess failures are *not* errors: they are recorded as a
//!   [`ProcessOutcome`](crate::shell::ProcessOutcome) and judged by the stage
//!   that ran them
//! - Use `SetupError` for failures that must stop a command (bad config);
//!   a wrapper that cannot be written is a `SetupError` the CESAR stage
//!   reports and then moves past
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The CESAR wrapper script could not be written or made executable.
    #[error("Failed to write wrapper at {path}: {source}")]
    WrapperWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
