// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitgate - Conventional Commits gate
//!
//! Checks the first line of a commit message against the Conventional
//! Commits header grammar. Intended to run from a `commit-msg` hook.
//!
//! # Rules
//!
//! - **Empty**: an empty first line is rejected
//! - **Git-generated**: lines starting with `Merge ` or `Revert ` are accepted
//! - **Grammar**: everything else must read `type(scope)!: subject` with a
//!   type from a fixed list
//!
//! # Example
//!
//! ```
//! use commitgate::rules::{validate_str, Verdict};
//!
//! assert!(validate_str("feat(cli): add new flag").is_accepted());
//!
//! if let Verdict::Reject(rejection) = validate_str("Fixed a bug") {
//!     assert_eq!(rejection.hint().as_deref(), Some("fix: a bug"));
//! }
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod example;
pub mod rules;

// Re-exports for convenience
pub use config::GateConfig;
pub use error::{GateError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitgate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
