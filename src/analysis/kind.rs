// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Change type and scope classification.
//!
//! Both classifiers are tables of independent pattern families. Every family
//! that matches contributes one label, in table order.

use crate::labels::LabelSuggestion;
use lazy_static::lazy_static;
use regex::Regex;

use super::context::AnalysisContext;
use super::files::{is_markdown, is_test_file};

/// Confidence every type label starts from.
const TYPE_BASE_CONFIDENCE: u32 = 60;
/// Upper bound for type and scope confidence.
const CONFIDENCE_CAP: u32 = 95;
/// Confidence every scope label starts from.
const SCOPE_BASE_CONFIDENCE: u32 = 70;
/// Largest boost a scope gets when every file matches it.
const SCOPE_MAX_BOOST: usize = 25;

/// A family of commit-message patterns mapping to one type label.
struct TypeFamily {
    name: &'static str,
    color: &'static str,
    description: &'static str,
    patterns: Vec<Regex>,
    boost: fn(&AnalysisContext, &[String]) -> u32,
}

/// A family of path patterns mapping to one scope label.
struct ScopeFamily {
    name: &'static str,
    color: &'static str,
    area: &'static str,
    patterns: Vec<Regex>,
}

fn regexes(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
        .collect()
}

lazy_static! {
    static ref TYPE_FAMILIES: Vec<TypeFamily> = vec![
        TypeFamily {
            name: "type:bug",
            color: "d73a4a",
            description: "Fixes incorrect behavior",
            patterns: regexes(&[
                r"\bfix(es|ed|ing)?\b",
                r"\bbugs?\b",
                r"\bhotfix(es)?\b",
                r"\b(crash|crashes|regression)\b",
            ]),
            boost: |ctx, _| if ctx.deleted_lines > ctx.added_lines { 10 } else { 0 },
        },
        TypeFamily {
            name: "type:feature",
            color: "a2eeef",
            description: "Adds new functionality",
            patterns: regexes(&[
                r"\bfeat(\([^)]*\))?!?:",
                r"\bfeatures?\b",
                r"\b(implement|implements|implemented|introduce|introduces|introduced)\b",
                r"\badd(s|ed)? (new|support)\b",
            ]),
            boost: |ctx, _| if ctx.added_lines > ctx.deleted_lines * 2 { 15 } else { 0 },
        },
        TypeFamily {
            name: "type:docs",
            color: "0075ca",
            description: "Documentation changes",
            patterns: regexes(&[
                r"\bdocs?(\([^)]*\))?!?:",
                r"\bdocumentation\b",
                r"\breadme\b",
                r"\bchangelog\b",
            ]),
            boost: |ctx, _| {
                if ctx.changed_files.iter().any(|f| is_markdown(f)) { 20 } else { 0 }
            },
        },
        TypeFamily {
            name: "type:refactor",
            color: "fbca04",
            description: "Restructures code without changing behavior",
            patterns: regexes(&[
                r"\brefactor(s|ed|ing)?\b",
                r"\brestructur(e|es|ed|ing)\b",
                r"\bclean(ed|s)?[ -]?up\b",
                r"\bsimplif(y|ies|ied)\b",
            ]),
            boost: |ctx, _| if is_balanced(ctx) { 10 } else { 0 },
        },
        TypeFamily {
            name: "type:test",
            color: "bfd4f2",
            description: "Adds or updates tests",
            patterns: regexes(&[
                r"\btests?(\([^)]*\))?!?:",
                r"\b(unit|integration|e2e|regression) tests?\b",
                r"\b(add|adds|added|update|updates|updated|fix|fixes|fixed) tests?\b",
                r"\btest (cases?|coverage)\b",
            ]),
            boost: |ctx, _| {
                if ctx.changed_files.iter().any(|f| is_test_file(f)) { 20 } else { 0 }
            },
        },
        TypeFamily {
            name: "type:chore",
            color: "fef2c0",
            description: "Maintenance, tooling or dependency work",
            patterns: regexes(&[
                r"\bchore(\([^)]*\))?!?:",
                r"\b(build|ci)(\([^)]*\))?!?:",
                r"\bbump(s|ed)?\b",
                r"\b(deps|dependency|dependencies)\b",
            ]),
            boost: |ctx, manifests| {
                if super::flags::has_dependency_updates(ctx, manifests) { 20 } else { 0 }
            },
        },
    ];

    static ref SCOPE_FAMILIES: Vec<ScopeFamily> = vec![
        ScopeFamily {
            name: "scope:api",
            color: "5319e7",
            area: "the API",
            patterns: regexes(&[
                r"(^|/)api/",
                r"(^|/)(routes?|controllers?|endpoints?|handlers?)/",
                r"\.(graphql|proto)$",
                r"(^|/)openapi\.(ya?ml|json)$",
            ]),
        },
        ScopeFamily {
            name: "scope:ui",
            color: "c5def5",
            area: "the user interface",
            patterns: regexes(&[
                r"(^|/)(components?|pages|views|layouts|styles?)/",
                r"\.(tsx|jsx|vue|svelte|css|scss|sass|less|html)$",
            ]),
        },
        ScopeFamily {
            name: "scope:docs",
            color: "0075ca",
            area: "documentation",
            patterns: regexes(&[r"(^|/)docs?/", r"\.(md|mdx|rst|adoc)$"]),
        },
        ScopeFamily {
            name: "scope:tests",
            color: "bfd4f2",
            area: "tests",
            patterns: regexes(&[
                r"(^|/)(tests?|__tests__|specs?|e2e)/",
                r"\.(test|spec)\.[a-z0-9]+$",
                r"_(test|spec)\.[a-z0-9]+$",
            ]),
        },
        ScopeFamily {
            name: "scope:ci",
            color: "1d76db",
            area: "CI configuration",
            patterns: regexes(&[
                r"(^|/)\.github/workflows/",
                r"(^|/)\.gitlab-ci\.ya?ml$",
                r"(^|/)\.circleci/",
                r"(^|/)(jenkinsfile|azure-pipelines\.ya?ml|\.travis\.yml)$",
            ]),
        },
    ];
}

/// Additions and deletions within a factor of two of each other.
fn is_balanced(ctx: &AnalysisContext) -> bool {
    if ctx.added_lines == 0 || ctx.deleted_lines == 0 {
        return false;
    }
    let ratio = ctx.added_lines as f64 / ctx.deleted_lines as f64;
    ratio > 0.5 && ratio < 2.0
}

/// Suggest type labels from commit messages.
///
/// `manifests` is the dependency file list used to corroborate chores.
pub fn type_labels(ctx: &AnalysisContext, manifests: &[String]) -> Vec<LabelSuggestion> {
    let corpus = ctx.message_corpus();
    if corpus.trim().is_empty() {
        return Vec::new();
    }

    let commits = ctx.commit_texts();
    let mut labels = Vec::new();

    for family in TYPE_FAMILIES.iter() {
        if !family.patterns.iter().any(|re| re.is_match(&corpus)) {
            continue;
        }

        let confidence = (TYPE_BASE_CONFIDENCE + (family.boost)(ctx, manifests)).min(CONFIDENCE_CAP);
        let mut label =
            LabelSuggestion::new(family.name, family.color, family.description, confidence);

        let matched_commit = commits
            .iter()
            .find(|c| family.patterns.iter().any(|re| re.is_match(c.full)));
        if let Some(commit) = matched_commit {
            label = label.with_evidence(commit.evidence());
        }

        labels.push(label);
    }

    labels
}

/// Suggest scope labels from changed paths.
pub fn scope_labels(ctx: &AnalysisContext) -> Vec<LabelSuggestion> {
    let total = ctx.file_count();
    if total == 0 {
        return Vec::new();
    }

    let mut labels = Vec::new();

    for family in SCOPE_FAMILIES.iter() {
        let matched = ctx
            .changed_files
            .iter()
            .filter(|f| family.patterns.iter().any(|re| re.is_match(f)))
            .count();
        if matched == 0 {
            continue;
        }

        // Rounded share of matching files scaled to the maximum boost.
        let boost = (SCOPE_MAX_BOOST * matched * 2 + total) / (total * 2);
        let confidence = (SCOPE_BASE_CONFIDENCE + boost as u32).min(CONFIDENCE_CAP);
        labels.push(LabelSuggestion::new(
            family.name,
            family.color,
            format!(
                "{} of {} changed file{} touch {}",
                matched,
                total,
                if total == 1 { "" } else { "s" },
                family.area
            ),
            confidence,
        ));
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DEPENDENCY_FILES;
    use crate::git::CommitInfo;

    fn manifests() -> Vec<String> {
        DEFAULT_DEPENDENCY_FILES.iter().map(|s| s.to_string()).collect()
    }

    fn ctx(files: &[&str], added: usize, deleted: usize, messages: &[&str]) -> AnalysisContext {
        AnalysisContext {
            changed_files: files.iter().map(|s| s.to_string()).collect(),
            added_lines: added,
            deleted_lines: deleted,
            commit_messages: messages.iter().map(|s| s.to_string()).collect(),
            ..AnalysisContext::default()
        }
    }

    fn find<'a>(labels: &'a [LabelSuggestion], name: &str) -> Option<&'a LabelSuggestion> {
        labels.iter().find(|l| l.name == name)
    }

    #[test]
    fn test_bug_from_fix_commit() {
        let labels = type_labels(&ctx(&["src/foo.ts"], 20, 5, &["fix: bug"]), &manifests());
        let bug = find(&labels, "type:bug").unwrap();
        assert_eq!(bug.confidence, 60);
        assert_eq!(bug.evidence.as_deref(), Some("fix: bug"));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn test_bug_boost_when_deleting() {
        let labels = type_labels(&ctx(&["src/a.rs"], 2, 30, &["Fixed crash on start"]), &manifests());
        assert_eq!(find(&labels, "type:bug").unwrap().confidence, 70);
    }

    #[test]
    fn test_multiple_types_co_occur_in_table_order() {
        let labels = type_labels(
            &ctx(&["src/a.rs"], 10, 10, &["feat: labels", "fix: crash"]),
            &manifests(),
        );
        let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["type:bug", "type:feature"]);
    }

    #[test]
    fn test_feature_boost() {
        let labels = type_labels(&ctx(&["src/a.rs"], 100, 10, &["feat(api): add endpoint"]), &manifests());
        assert_eq!(find(&labels, "type:feature").unwrap().confidence, 75);
    }

    #[test]
    fn test_docs_boost_with_markdown() {
        let labels = type_labels(&ctx(&["docs/guide.md"], 5, 1, &["docs: explain setup"]), &manifests());
        assert_eq!(find(&labels, "type:docs").unwrap().confidence, 80);
    }

    #[test]
    fn test_test_boost_with_test_file() {
        let labels = type_labels(
            &ctx(&["src/foo.test.ts"], 5, 1, &["test: cover parser"]),
            &manifests(),
        );
        assert_eq!(find(&labels, "type:test").unwrap().confidence, 80);
    }

    #[test]
    fn test_refactor_boost_when_balanced() {
        let labels = type_labels(&ctx(&["src/a.rs"], 40, 30, &["refactor: split module"]), &manifests());
        assert_eq!(find(&labels, "type:refactor").unwrap().confidence, 70);
    }

    #[test]
    fn test_chore_with_manifest() {
        let labels = type_labels(&ctx(&["package.json"], 1, 1, &["chore: bump deps"]), &manifests());
        assert_eq!(find(&labels, "type:chore").unwrap().confidence, 80);
    }

    #[test]
    fn test_word_boundaries() {
        let labels = type_labels(&ctx(&["src/a.rs"], 1, 1, &["prefix handling", "debugger output"]), &manifests());
        assert!(find(&labels, "type:bug").is_none());
    }

    #[test]
    fn test_no_commits_no_types() {
        assert!(type_labels(&ctx(&["src/a.rs"], 1, 1, &[]), &manifests()).is_empty());
    }

    #[test]
    fn test_evidence_uses_commit_id() {
        let mut context = ctx(&["src/a.rs"], 1, 1, &["feat: x"]);
        context.commits = vec![CommitInfo {
            id: "abc1234".to_string(),
            message: "feat: x".to_string(),
            full_message: "feat: x".to_string(),
        }];
        let labels = type_labels(&context, &manifests());
        assert_eq!(
            find(&labels, "type:feature").unwrap().evidence.as_deref(),
            Some("abc1234 feat: x")
        );
    }

    #[test]
    fn test_confidence_capped() {
        for label in type_labels(
            &ctx(&["docs/a.md", "src/a.test.ts", "package.json"], 100, 1, &[
                "feat: a", "fix: b", "docs: c", "test: d", "chore: e", "refactor: f",
            ]),
            &manifests(),
        ) {
            assert!(label.confidence <= 95);
        }
    }

    #[test]
    fn test_scope_labels() {
        let labels = scope_labels(&ctx(
            &["src/api/users.ts", "src/api/orders.ts", "docs/api.md", ".github/workflows/ci.yml"],
            10,
            2,
            &[],
        ));
        let api = find(&labels, "scope:api").unwrap();
        // 2 of 4 files: 70 + round(12.5)
        assert_eq!(api.confidence, 83);
        assert!(api.description.contains("2 of 4"));
        assert_eq!(find(&labels, "scope:docs").unwrap().confidence, 76);
        assert!(find(&labels, "scope:ci").is_some());
        assert!(find(&labels, "scope:ui").is_none());
    }

    #[test]
    fn test_scope_full_match_is_capped() {
        let labels = scope_labels(&ctx(&["src/components/Button.tsx"], 1, 0, &[]));
        assert_eq!(find(&labels, "scope:ui").unwrap().confidence, 95);
    }

    #[test]
    fn test_scope_none_for_plain_source() {
        assert!(scope_labels(&ctx(&["src/foo.ts"], 20, 5, &[])).is_empty());
    }
}
