// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! PRL - Pull Request Label suggestions
//!
//! Suggests labels for the changes on a branch.

use clap::Parser;
use prl::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug || cli.is_verbose());

    // Run the CLI
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(tip) = e.tip() {
            eprintln!("Tip: {}", tip);
        }
        std::process::exit(1);
    }
}

/// Set up logging/tracing on stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("prl=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
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
