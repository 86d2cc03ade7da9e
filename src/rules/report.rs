// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering verdicts for the terminal and for scripts.

use crate::commit::CommitType;
use crate::config::OutputFormat;
use crate::error::ValidationError;
use console::style;

use super::verdict::{Acceptance, RejectReason, Rejection, Verdict, EXPECTED_FORMAT};

/// Prints verdicts to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: OutputFormat,
    hints: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, hints: bool) -> Self {
        Self { format, hints }
    }

    /// Print the verdict to stdout. Text output is silent on acceptance.
    pub fn print(&self, verdict: &Verdict) {
        let rendered = match self.format {
            OutputFormat::Json => Some(self.render_json(verdict)),
            OutputFormat::Text => self.render_text(verdict),
        };

        if let Some(output) = rendered {
            println!("{}", output);
        }
    }

    /// Render the text diagnostic, or `None` for an accepted message.
    pub fn render_text(&self, verdict: &Verdict) -> Option<String> {
        match verdict {
            Verdict::Accept(_) => None,
            Verdict::Reject(rejection) => Some(self.render_rejection(rejection)),
        }
    }

    fn render_rejection(&self, rejection: &Rejection) -> String {
        if rejection.reason == RejectReason::Empty {
            return style("Commit message is empty").red().bold().to_string();
        }

        let mut lines = vec![
            style("Invalid commit message (Conventional Commits required).")
                .red()
                .bold()
                .to_string(),
            format!("Expected: {}", EXPECTED_FORMAT),
            format!("Allowed types: {}", CommitType::joined()),
            format!("Got: {}", rejection.first_line),
        ];

        if self.hints {
            if let Some(hint) = rejection.hint() {
                lines.push(format!(
                    "{} did you mean \"{}\"?",
                    style("Hint:").dim(),
                    hint
                ));
            }
        }

        lines.join("\n")
    }

    /// Render the verdict as pretty-printed JSON.
    pub fn render_json(&self, verdict: &Verdict) -> String {
        let json = match verdict {
            Verdict::Accept(acceptance) => {
                let mut json = serde_json::json!({
                    "valid": true,
                    "kind": acceptance.kind(),
                });
                if let Acceptance::Conventional(header) = acceptance {
                    json["first_line"] = serde_json::json!(header.header());
                    json["type"] = serde_json::json!(header.commit_type);
                    json["scope"] = serde_json::json!(header.scope);
                    json["breaking"] = serde_json::json!(header.breaking);
                    json["subject"] = serde_json::json!(header.subject);
                }
                json
            }
            Verdict::Reject(rejection) => {
                let reason = ValidationError::from(rejection.clone()).to_string();
                let hint = rejection.hint().filter(|_| self.hints);
                serde_json::json!({
                    "valid": false,
                    "kind": rejection.reason.kind(),
                    "reason": reason,
                    "first_line": rejection.first_line,
                    "expected": EXPECTED_FORMAT,
                    "allowed_types": rejection.allowed_types(),
                    "hint": hint,
                })
            }
        };

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}
