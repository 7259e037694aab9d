// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::Path;

use crate::config::PrlConfig;
use crate::error::{ConfigError, PrlError, Result, ResultExt};
use crate::git::GitCli;
use crate::output::OutputFormat;
use crate::suggest::{suggest_labels, SuggestOptions, SuggestOutcome};

use super::args::{Cli, Commands, InitArgs, SuggestArgs};

/// File written by `prl init`.
const INIT_FILE: &str = "prl.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Suggest(args) => {
            let config = load_config(&cli)?;
            run_suggest(&config, args)
        }
        Commands::Init(args) => run_init(Path::new("."), args),
        Commands::Version => run_version(),
    }
}

fn load_config(cli: &Cli) -> Result<PrlConfig> {
    if let Some(config_path) = &cli.config {
        PrlConfig::load_from(config_path)
    } else {
        PrlConfig::load()
    }
}

/// Run the suggest command.
fn run_suggest(config: &PrlConfig, args: SuggestArgs) -> Result<()> {
    tracing::debug!("Running suggest command with args: {:?}", args);

    let format = OutputFormat::parse_or_default(
        args.format.as_deref().unwrap_or(config.output.format.as_str()),
    );
    let options = SuggestOptions {
        branch: args.branch,
        target: args.target,
        format,
        verbose: args.verbose,
        no_fetch: args.no_fetch,
        colors: args.colors || config.output.colors,
        cwd: std::env::current_dir()?,
    };

    match suggest_labels(&GitCli::new(), &options, config)? {
        SuggestOutcome::NoChanges { .. } => println!("No changes found between branches."),
        SuggestOutcome::Suggested { rendered, .. } => println!("{}", rendered),
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("prl {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(dir: &Path, args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = dir.join(INIT_FILE);

    if config_path.exists() && !args.force {
        return Err(PrlError::Config(ConfigError::AlreadyExists { path: config_path }));
    }

    std::fs::write(&config_path, example_config()).context("init")?;
    println!("Created {}", config_path.display());

    Ok(())
}
