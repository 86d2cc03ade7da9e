// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message gate.

use crate::commit::{CommitMessage, ConventionalHeader};
use crate::error::Result;
use std::path::Path;

use super::verdict::{Acceptance, Rejection, Verdict};

/// First-line prefix git writes for merge commits.
const MERGE_PREFIX: &str = "Merge ";

/// First-line prefix git writes for reverts.
const REVERT_PREFIX: &str = "Revert ";

/// Git-generated commits skip the grammar check.
fn exemption(first_line: &str) -> Option<Acceptance> {
    if first_line.starts_with(MERGE_PREFIX) {
        Some(Acceptance::Merge)
    } else if first_line.starts_with(REVERT_PREFIX) {
        Some(Acceptance::Revert)
    } else {
        None
    }
}

/// Classify a commit message by its first line.
pub fn validate(message: &CommitMessage) -> Verdict {
    let first_line = message.first_line();

    if first_line.is_empty() {
        tracing::debug!("Rejecting empty commit message");
        return Verdict::Reject(Rejection::empty());
    }

    if let Some(acceptance) = exemption(first_line) {
        tracing::debug!("Accepting git-generated {} commit", acceptance.kind());
        return Verdict::Accept(acceptance);
    }

    match ConventionalHeader::parse(first_line) {
        Some(header) => {
            tracing::debug!("Accepting conventional header: {:?}", header);
            Verdict::Accept(Acceptance::Conventional(header))
        }
        None => {
            tracing::debug!("Rejecting non-conventional header: {:?}", first_line);
            Verdict::Reject(Rejection::non_conventional(first_line))
        }
    }
}

/// Classify raw message text.
pub fn validate_str(message: &str) -> Verdict {
    validate(&CommitMessage::new(message))
}

/// Read a commit message file and classify it.
pub fn validate_file(path: &Path) -> Result<Verdict> {
    let message = CommitMessage::read_from(path)?;
    Ok(validate(&message))
}
