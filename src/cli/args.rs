// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// PRL - Pull request label suggestions
///
/// Suggests labels for the changes between a branch and its target.
#[derive(Parser, Debug)]
#[command(name = "prl")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Suggest pull request labels from git history", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to suggest if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PRL_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Suggest labels for the current branch (default command)
    Suggest(SuggestArgs),

    /// Write a commented prl.toml to the current directory
    Init(InitArgs),

    /// Show version information
    Version,
}

/// Arguments for the suggest command.
#[derive(Args, Debug, Clone, Default)]
pub struct SuggestArgs {
    /// Source branch (defaults to the checked-out branch)
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Target branch to compare against (detected when omitted)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Output format: json, table, list, txt or csv
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print a summary of the analyzed changes to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Never fetch a missing target branch
    #[arg(long)]
    pub no_fetch: bool,

    /// Include label colors in the output
    #[arg(long)]
    pub colors: bool,
}

/// Arguments for the init command.
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the command to run, defaulting to suggest.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Suggest(SuggestArgs::default()))
    }

    /// Whether verbose output was requested for the command being run.
    pub fn is_verbose(&self) -> bool {
        matches!(self.command, Some(Commands::Suggest(ref args)) if args.verbose)
    }
}
