// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// commitgate - Conventional Commits gate
///
/// Checks the first line of a commit message file. Meant to run as a
/// commit-msg hook.
#[derive(Parser, Debug)]
#[command(name = "commitgate")]
#[command(author = "Eshan Roy")]
#[command(version = crate::version::VERSION)]
#[command(about = "Conventional Commits gate for commit-msg hooks", long_about = None)]
pub struct Cli {
    /// File containing the candidate commit message
    #[arg(value_name = "COMMIT_MSG_FILE")]
    pub commit_msg_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, env = "COMMITGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not print "did you mean" hints
    #[arg(long)]
    pub no_hints: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_file() {
        let args = Cli::parse_from(["commitgate", ".git/COMMIT_EDITMSG"]);
        assert_eq!(args.commit_msg_file, PathBuf::from(".git/COMMIT_EDITMSG"));
        assert!(!args.debug);
        assert!(args.format.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let args = Cli::parse_from([
            "commitgate",
            "--format",
            "json",
            "--no-hints",
            "-d",
            "msg.txt",
        ]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.no_hints);
        assert!(args.debug);
    }

    #[test]
    fn test_missing_file_argument() {
        let err = Cli::try_parse_from(["commitgate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_extra_argument() {
        let err = Cli::try_parse_from(["commitgate", "a", "b"]).unwrap_err();
        assert!(err.use_stderr());
        assert_eq!(err.exit_code(), 2);
    }
}
