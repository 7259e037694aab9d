// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Release impact classification.

use crate::labels::LabelSuggestion;
use lazy_static::lazy_static;
use regex::Regex;

use super::context::{AnalysisContext, CommitText};

lazy_static! {
    /// Conventional-commit subject with the `!` breaking marker.
    static ref BREAKING_SUBJECT: Regex = Regex::new(r"^[a-zA-Z]+(\([^)]*\))?!:").unwrap();
    /// Breaking-change footer anywhere in the message.
    static ref BREAKING_FOOTER: Regex = Regex::new(r"BREAKING[ -]CHANGE").unwrap();
    static ref FEATURE_SUBJECT: Regex = Regex::new(r"(?i)^feat(ure)?(\([^)]*\))?:").unwrap();
}

/// Whether a commit carries a breaking-change marker.
pub(crate) fn is_breaking_commit(commit: &CommitText<'_>) -> bool {
    BREAKING_SUBJECT.is_match(commit.subject) || BREAKING_FOOTER.is_match(commit.full)
}

/// Suggest the release impact.
///
/// Always exactly one label: breaking change over minor over patch.
pub fn release_labels(ctx: &AnalysisContext) -> Vec<LabelSuggestion> {
    let commits = ctx.commit_texts();

    if let Some(commit) = commits.iter().find(|c| is_breaking_commit(c)) {
        return vec![LabelSuggestion::new(
            "release:breaking-change",
            "b60205",
            "Requires a major version bump",
            95,
        )
        .with_evidence(commit.evidence())];
    }

    if let Some(commit) = commits.iter().find(|c| FEATURE_SUBJECT.is_match(c.subject)) {
        return vec![LabelSuggestion::new(
            "release:minor",
            "0e8a16",
            "Requires a minor version bump",
            85,
        )
        .with_evidence(commit.evidence())];
    }

    vec![LabelSuggestion::new(
        "release:patch",
        "c2e0c6",
        "Requires a patch version bump",
        75,
    )]
}
