// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The suggest pipeline.

use console::{style, Term};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

use crate::analysis::{analyze, AnalysisContext};
use crate::config::PrlConfig;
use crate::error::Result;
use crate::git::{ensure_git_installed, BranchResolver, DiffExtractor, GitRunner, Repository};
use crate::labels::SuggestedLabels;
use crate::output::{render, OutputFormat};

/// Inputs to a suggestion run.
#[derive(Debug, Clone, Default)]
pub struct SuggestOptions {
    /// Source branch; the checked-out branch when absent.
    pub branch: Option<String>,
    /// Comparison target; detected when absent.
    pub target: Option<String>,
    pub format: OutputFormat,
    /// Print the context summary to stderr.
    pub verbose: bool,
    /// Never fetch a missing target.
    pub no_fetch: bool,
    /// Include label colors in the rendering.
    pub colors: bool,
    /// Any directory inside the repository.
    pub cwd: PathBuf,
}

/// Result of a suggestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestOutcome {
    /// The branches do not differ; nothing was analyzed.
    NoChanges { branch: String, target: String },
    /// Labels were suggested and rendered.
    Suggested {
        labels: SuggestedLabels,
        rendered: String,
    },
}

/// Suggest labels for the changes between two branches.
///
/// Errors are fatal: git missing, not a repository, an unresolvable current
/// branch, an unavailable target or an unlistable diff.
pub fn suggest_labels<R: GitRunner + ?Sized>(
    runner: &R,
    options: &SuggestOptions,
    config: &PrlConfig,
) -> Result<SuggestOutcome> {
    ensure_git_installed(runner, &options.cwd)?;
    let repo = Repository::open(&options.cwd)?;
    let cwd = repo.workdir();

    let resolver = BranchResolver::new(runner, cwd, &config.git);
    let branch = match options.branch {
        Some(ref branch) => branch.clone(),
        None => resolver.current_branch()?,
    };
    let target = resolver.resolve_target(options.target.as_deref());
    tracing::debug!("Comparing '{}' against '{}'", branch, target);

    with_spinner(
        !options.no_fetch,
        format!("Checking target branch '{}'...", target),
        || resolver.ensure_available(&target, options.no_fetch),
    )?;

    let extractor = DiffExtractor::new(runner, cwd, &branch, &target);
    let ctx = AnalysisContext::build(&extractor, &branch, &target)?;

    if !ctx.has_changes() {
        tracing::debug!("No changes between '{}' and '{}'", branch, target);
        return Ok(SuggestOutcome::NoChanges { branch, target });
    }

    if options.verbose {
        let term = Term::stderr();
        term.write_line(&format!(
            "{} {}",
            style("Analyzing changes...").dim(),
            style(ctx.summary()).cyan()
        ))?;
    }

    let labels = analyze(&ctx, config);
    tracing::debug!("Suggested {} labels", labels.len());

    let rendered = render(&labels, options.format, options.colors);
    Ok(SuggestOutcome::Suggested { labels, rendered })
}

/// Run `f` behind a stderr spinner when it may touch the network.
fn with_spinner<T>(enabled: bool, message: String, f: impl FnOnce() -> T) -> T {
    if !enabled || !Term::stderr().is_term() {
        return f();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    spinner.finish_and_clear();
    result
}
