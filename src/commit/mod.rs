// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message text, header parsing and type tokens.

mod message;
mod types;

pub use message::{CommitMessage, ConventionalHeader};
pub use types::CommitType;
