// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message text and header parsing.

use crate::error::{Result, UsageError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

use super::types::CommitType;

lazy_static! {
    /// Regex for a Conventional Commits header line.
    static ref CONVENTIONAL_REGEX: Regex = Regex::new(&format!(
        r"^(?P<type>{})(?:\((?P<scope>[^)\r\n]+)\))?(?P<breaking>!)?: (?P<subject>\S.*)$",
        CommitType::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join("|")
    ))
    .unwrap();
}

/// Line boundaries: `\n`, `\r`, vertical tab, form feed, the ASCII
/// separators, NEL and the Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// A raw commit message, as handed to the commit-msg hook.
#[derive(Debug, Clone)]
pub struct CommitMessage {
    raw: String,
}

impl CommitMessage {
    /// Wrap message text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Read a commit message from a file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn read_from(path: &Path) -> Result<Self> {
        tracing::debug!("Reading commit message from: {:?}", path);

        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => UsageError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => UsageError::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        let raw = match String::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("{:?} is not valid UTF-8, decoding lossily", path);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        Ok(Self { raw })
    }

    /// The first line with surrounding whitespace trimmed.
    ///
    /// Empty when the message is empty or starts with a blank line.
    pub fn first_line(&self) -> &str {
        self.raw.split(is_line_break).next().unwrap_or("").trim()
    }
}

/// A parsed Conventional Commits header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConventionalHeader {
    /// Commit type (feat, fix, etc.).
    #[serde(rename = "type")]
    pub commit_type: CommitType,
    /// Optional scope.
    pub scope: Option<String>,
    /// Whether the `!` breaking marker is present.
    pub breaking: bool,
    /// Subject text after `: `.
    pub subject: String,
}

impl ConventionalHeader {
    /// Parse a single header line. Returns `None` when it does not match.
    pub fn parse(line: &str) -> Option<Self> {
        let captures = CONVENTIONAL_REGEX.captures(line)?;

        let commit_type = captures.name("type")?.as_str().parse().ok()?;
        let scope = captures.name("scope").map(|m| m.as_str().to_string());
        let subject = captures.name("subject")?.as_str().to_string();

        Some(Self {
            commit_type,
            scope,
            breaking: captures.name("breaking").is_some(),
            subject,
        })
    }

    /// Format the header back into a single line.
    pub fn header(&self) -> String {
        let mut result = String::new();
        result.push_str(self.commit_type.as_str());

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        if self.breaking {
            result.push('!');
        }

        result.push_str(": ");
        result.push_str(&self.subject);

        result
    }
}
