// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the git revision shown in debug output.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a git checkout vergen warns and the revision is simply omitted.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
