// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitgate.
//!
//! Every failure is terminal for the invocation. The variant decides the
//! process exit code, see [`GateError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for an accepted message.
pub const EXIT_OK: i32 = 0;

/// Exit code for a message that fails validation.
pub const EXIT_INVALID: i32 = 1;

/// Exit code for usage errors, missing files and bad configuration.
pub const EXIT_USAGE: i32 = 2;

/// The main error type for commitgate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Invocation errors
    #[error("{0}")]
    Usage(#[from] UsageError),

    // Validation errors
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GateError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::Validation(_) => EXIT_INVALID,
            GateError::Usage(_) | GateError::Config(_) => EXIT_USAGE,
        }
    }

    /// Whether the reporter has already printed a diagnostic for this error.
    pub fn is_reported(&self) -> bool {
        matches!(self, GateError::Validation(_))
    }
}

/// Wrong invocation or an unusable message file.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Commit message file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read commit message file {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },
}

/// The message was read but fails the Conventional Commits gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Commit message is empty")]
    EmptyMessage,

    #[error("Invalid commit message (Conventional Commits required): {first_line}")]
    NonConventional { first_line: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Result type alias for commitgate operations.
pub type Result<T> = std::result::Result<T, GateError>;
