// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Boolean signals derived from the context.

use glob::Pattern;
use lazy_static::lazy_static;
use regex::Regex;

use super::context::AnalysisContext;
use super::files::{is_doc_file, is_markdown, is_readme, is_source_file, is_test_file};
use super::release::is_breaking_commit;

lazy_static! {
    static ref BREAKING_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\bbreaking\b.*\bchanges?\b").unwrap(),
        Regex::new(r"(?i)\bmajor\b.*\bversions?\b").unwrap(),
        Regex::new(r"(?i)\bincompatible\b").unwrap(),
        Regex::new(r"(?i)\bremov(e|es|ed|ing)\b.*\b(apis?|methods?|functions?)\b").unwrap(),
    ];
}

/// Whether any commit describes a breaking change.
pub fn has_breaking_changes(ctx: &AnalysisContext) -> bool {
    ctx.commit_texts().iter().any(|commit| {
        is_breaking_commit(commit) || BREAKING_PATTERNS.iter().any(|re| re.is_match(commit.full))
    })
}

/// Whether any changed path names one of the dependency manifests.
pub fn has_dependency_updates(ctx: &AnalysisContext, manifests: &[String]) -> bool {
    ctx.changed_files
        .iter()
        .any(|path| manifests.iter().any(|m| path.contains(m.as_str())))
}

/// Source changed but no documentation did.
pub fn needs_documentation(ctx: &AnalysisContext) -> bool {
    let has_source = ctx.changed_files.iter().any(|f| is_source_file(f));
    let has_docs = ctx.changed_files.iter().any(|f| is_doc_file(f));
    has_source && !has_docs
}

/// Non-test source changed but no test did.
pub fn needs_tests(ctx: &AnalysisContext) -> bool {
    let has_source = ctx
        .changed_files
        .iter()
        .any(|f| is_source_file(f) && !is_test_file(f));
    let has_tests = ctx.changed_files.iter().any(|f| is_test_file(f));
    has_source && !has_tests
}

/// New markdown content landed while the README stayed untouched.
///
/// Line counts are only known for the whole diff, so growth is judged on
/// the aggregate.
pub fn needs_readme_update(ctx: &AnalysisContext) -> bool {
    let new_markdown = ctx
        .changed_files
        .iter()
        .any(|f| is_markdown(f) && !is_readme(f));
    let readme_touched = ctx.changed_files.iter().any(|f| is_readme(f));
    new_markdown && ctx.added_lines > ctx.deleted_lines && !readme_touched
}

/// Whether the branch name matches one of the hotfix globs.
///
/// Invalid patterns never match.
pub fn is_hotfix_branch(branch: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .any(|p| p.matches(branch))
}
