// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Diff analysis.
//!
//! Every analyzer is a pure function of an [`AnalysisContext`]; [`analyze`]
//! runs them all and assembles the [`SuggestedLabels`].

mod context;
pub mod files;
pub mod flags;
mod kind;
mod release;
mod size;

pub use context::{AnalysisContext, CommitText};
pub use kind::{scope_labels, type_labels};
pub use release::release_labels;
pub use size::size_label;

use crate::config::PrlConfig;
use crate::labels::{LabelFlags, SuggestedLabels};

/// Run every analyzer over the context.
pub fn analyze(ctx: &AnalysisContext, config: &PrlConfig) -> SuggestedLabels {
    let size = if ctx.has_changes() {
        Some(size_label(ctx, &config.size))
    } else {
        None
    };

    let scopes = if config.labels.scope {
        scope_labels(ctx)
    } else {
        Vec::new()
    };

    let flags = LabelFlags {
        breaking_change: flags::has_breaking_changes(ctx),
        dependencies: flags::has_dependency_updates(ctx, &config.labels.dependency_files),
        documentation_needed: flags::needs_documentation(ctx),
        tests_needed: flags::needs_tests(ctx),
        readme_need_update: flags::needs_readme_update(ctx),
        hotfix: flags::is_hotfix_branch(&ctx.branch, &config.labels.hotfix_branches),
    };

    tracing::debug!(?flags, "Computed label flags");

    SuggestedLabels {
        size,
        types: type_labels(ctx, &config.labels.dependency_files),
        scopes,
        release: release_labels(ctx),
        flags,
    }
}
