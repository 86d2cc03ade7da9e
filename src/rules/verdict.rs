// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation outcome types.

use crate::commit::{CommitType, ConventionalHeader};
use crate::error::ValidationError;

/// Header template shown in diagnostics.
pub const EXPECTED_FORMAT: &str = "<type>(optional-scope)!?: <subject>";

/// Outcome of validating one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept(Acceptance),
    Reject(Rejection),
}

impl Verdict {
    /// Check if the message was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accept(_))
    }

    /// Convert into a `Result`, turning a rejection into a [`ValidationError`].
    pub fn into_result(self) -> Result<Acceptance, ValidationError> {
        match self {
            Verdict::Accept(acceptance) => Ok(acceptance),
            Verdict::Reject(rejection) => Err(rejection.into()),
        }
    }
}

/// Why a message was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceptance {
    /// A header matching the Conventional Commits grammar.
    Conventional(ConventionalHeader),
    /// A git-generated `Merge ...` line.
    Merge,
    /// A git-generated `Revert ...` line.
    Revert,
}

impl Acceptance {
    /// Short machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Acceptance::Conventional(_) => "conventional",
            Acceptance::Merge => "merge",
            Acceptance::Revert => "revert",
        }
    }
}

/// Why a message was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing on the first line.
    Empty,
    /// The first line does not follow the grammar.
    NonConventional,
}

impl RejectReason {
    /// Short machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RejectReason::Empty => "empty",
            RejectReason::NonConventional => "non_conventional",
        }
    }
}

/// A rejected message together with what is needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectReason,
    /// The trimmed first line that was examined.
    pub first_line: String,
}

impl Rejection {
    pub fn empty() -> Self {
        Self {
            reason: RejectReason::Empty,
            first_line: String::new(),
        }
    }

    pub fn non_conventional(first_line: impl Into<String>) -> Self {
        Self {
            reason: RejectReason::NonConventional,
            first_line: first_line.into(),
        }
    }

    /// Types a valid header may start with.
    pub fn allowed_types(&self) -> &'static [CommitType] {
        CommitType::all()
    }

    /// Suggest a corrected header for a non-conventional line.
    ///
    /// `Fixed a bug` becomes `fix: a bug`. No suggestion when the leading
    /// word is not recognisable or runs into anything but whitespace or `:`.
    pub fn hint(&self) -> Option<String> {
        if self.reason != RejectReason::NonConventional {
            return None;
        }

        let line = self.first_line.as_str();
        let word_end = line
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(line.len());
        let (word, rest) = line.split_at(word_end);

        let word_boundary = rest
            .chars()
            .next()
            .map_or(true, |c| c.is_whitespace() || c == ':');
        if word.is_empty() || !word_boundary {
            return None;
        }

        let rest = rest.trim_start_matches(':').trim();
        if rest.is_empty() {
            return None;
        }

        let commit_type = CommitType::suggest(word)?;
        Some(format!("{}: {}", commit_type, rest))
    }
}

impl From<Rejection> for ValidationError {
    fn from(rejection: Rejection) -> Self {
        match rejection.reason {
            RejectReason::Empty => ValidationError::EmptyMessage,
            RejectReason::NonConventional => ValidationError::NonConventional {
                first_line: rejection.first_line,
            },
        }
    }
}
