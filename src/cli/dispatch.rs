// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution and exit-code mapping.

use crate::config::GateConfig;
use crate::error::{Result, EXIT_OK, EXIT_USAGE};
use crate::rules::{self, Reporter};

use super::args::Cli;

/// Check the commit message named on the command line.
///
/// Rejections are printed before the error is returned.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!("commitgate {}", crate::version::version_string());

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        GateConfig::load_from(config_path)?
    } else {
        GateConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    let format = cli.format.unwrap_or(config.output.format);
    let hints = config.ui.hints && !cli.no_hints;

    tracing::debug!(
        "Checking {:?} (format: {:?}, hints: {})",
        cli.commit_msg_file,
        format,
        hints
    );

    let verdict = rules::validate_file(&cli.commit_msg_file)?;
    Reporter::new(format, hints).print(&verdict);

    verdict.into_result()?;
    Ok(())
}

/// Report an argument parsing failure and return the exit code.
///
/// Usage errors go to stdout like every other diagnostic. `--help` and
/// `--version` keep clap's own output and exit code.
pub fn report_parse_error(err: clap::Error) -> i32 {
    if err.use_stderr() {
        println!("{}", err.render());
        EXIT_USAGE
    } else {
        let _ = err.print();
        EXIT_OK
    }
}

/// Map the outcome of [`run`] to a process exit code, printing any error
/// that has not been reported yet.
pub fn exit_code(outcome: Result<()>) -> i32 {
    match outcome {
        Ok(()) => EXIT_OK,
        Err(e) => {
            if !e.is_reported() {
                println!("{}", e);
            }
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GateError, UsageError, ValidationError, EXIT_INVALID};
    use clap::Parser;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code(Ok(())), EXIT_OK);
        assert_eq!(
            exit_code(Err(ValidationError::EmptyMessage.into())),
            EXIT_INVALID
        );
        assert_eq!(
            exit_code(Err(GateError::Usage(UsageError::FileNotFound {
                path: PathBuf::from("missing"),
            }))),
            EXIT_USAGE
        );
    }

    #[test]
    fn test_parse_error_exit_code() {
        let err = Cli::try_parse_from(["commitgate"]).unwrap_err();
        assert_eq!(report_parse_error(err), EXIT_USAGE);
    }

    #[test]
    fn test_run_with_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("commitgate.toml");
        let message = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&config, "[ui]\ncolor = false\n").unwrap();
        std::fs::write(&message, "perf: cache regex\n").unwrap();

        let cli = Cli::parse_from([
            OsStr::new("commitgate"),
            OsStr::new("--config"),
            config.as_os_str(),
            message.as_os_str(),
        ]);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_run_rejects() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("commitgate.toml");
        let message = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&config, "").unwrap();
        std::fs::write(&message, "Fixed a bug\n").unwrap();

        let cli = Cli::parse_from([
            OsStr::new("commitgate"),
            OsStr::new("--config"),
            config.as_os_str(),
            message.as_os_str(),
        ]);
        let err = run(cli).unwrap_err();
        assert!(matches!(
            err,
            GateError::Validation(ValidationError::NonConventional { .. })
        ));
    }
}
