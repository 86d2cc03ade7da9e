// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitgate - Conventional Commits gate
//!
//! Exit codes: 0 accepted, 1 rejected, 2 usage error or missing file.

use clap::Parser;
use commitgate::cli::{exit_code, report_parse_error, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => std::process::exit(report_parse_error(e)),
    };

    // Set up logging
    setup_logging(cli.debug);

    // Run the check
    std::process::exit(exit_code(run(cli)));
}

/// Set up logging/tracing. Records go to stderr so stdout only carries
/// diagnostics.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commitgate=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
