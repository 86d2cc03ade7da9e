// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The Conventional Commits gate.
//!
//! [`validate`] is a pure function of the message's first line. The
//! [`Reporter`] turns its [`Verdict`] into the diagnostic printed by the CLI.

mod engine;
mod report;
mod verdict;

pub use engine::{validate, validate_file, validate_str};
pub use report::Reporter;
pub use verdict::{Acceptance, RejectReason, Rejection, Verdict, EXPECTED_FORMAT};
