// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The facts every analyzer works from.

use crate::error::Result;
use crate::git::{CommitInfo, DiffExtractor, GitRunner};

/// Everything known about the comparison of `branch` against `target`.
///
/// Built once per invocation and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    /// Changed paths relative to the repository root.
    pub changed_files: Vec<String>,
    /// Inserted lines across the diff.
    pub added_lines: usize,
    /// Deleted lines across the diff.
    pub deleted_lines: usize,
    /// Commit subjects, newest first.
    pub commit_messages: Vec<String>,
    /// Commit details in the same order as `commit_messages`.
    pub commits: Vec<CommitInfo>,
    /// Source branch.
    pub branch: String,
    /// Comparison target.
    pub target: String,
}

/// A commit as seen by the message-based analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitText<'a> {
    pub id: Option<&'a str>,
    pub subject: &'a str,
    pub full: &'a str,
}

impl CommitText<'_> {
    /// Short form used as label evidence.
    pub fn evidence(&self) -> String {
        match self.id {
            Some(id) => format!("{} {}", id, self.subject),
            None => self.subject.to_string(),
        }
    }
}

impl AnalysisContext {
    /// Gather the context through a diff extractor.
    ///
    /// Only a failure to list changed files is an error.
    pub fn build<R: GitRunner + ?Sized>(
        extractor: &DiffExtractor<'_, R>,
        branch: &str,
        target: &str,
    ) -> Result<Self> {
        let changed_files = extractor.changed_files()?;
        if changed_files.is_empty() {
            return Ok(Self {
                branch: branch.to_string(),
                target: target.to_string(),
                ..Self::default()
            });
        }

        let lines = extractor.line_changes();
        let commit_messages = extractor.commit_messages();
        let commits = extractor.detailed_commits();

        Ok(Self {
            changed_files,
            added_lines: lines.added,
            deleted_lines: lines.deleted,
            commit_messages,
            commits,
            branch: branch.to_string(),
            target: target.to_string(),
        })
    }

    /// Whether the diff touched anything.
    pub fn has_changes(&self) -> bool {
        !self.changed_files.is_empty()
    }

    /// Inserted plus deleted lines.
    pub fn total_lines(&self) -> usize {
        self.added_lines + self.deleted_lines
    }

    /// Number of changed files.
    pub fn file_count(&self) -> usize {
        self.changed_files.len()
    }

    /// Commits for message analysis.
    ///
    /// Detailed commits are preferred; bare subjects are used when details
    /// could not be read.
    pub fn commit_texts(&self) -> Vec<CommitText<'_>> {
        if !self.commits.is_empty() {
            return self
                .commits
                .iter()
                .map(|c| CommitText {
                    id: Some(c.id.as_str()),
                    subject: c.message.as_str(),
                    full: c.full_message.as_str(),
                })
                .collect();
        }

        self.commit_messages
            .iter()
            .map(|m| CommitText {
                id: None,
                subject: m.lines().next().unwrap_or(""),
                full: m.as_str(),
            })
            .collect()
    }

    /// All commit text lowercased and joined, one commit per line group.
    pub fn message_corpus(&self) -> String {
        self.commit_texts()
            .iter()
            .map(|c| c.full.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get a human-readable summary of the context.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        parts.push(format!("Branch: {} -> {}", self.branch, self.target));
        parts.push(format!("Files: {}", self.file_count()));
        parts.push(format!(
            "Changes: +{} -{}",
            self.added_lines, self.deleted_lines
        ));
        parts.push(format!("Commits: {}", self.commit_texts().len()));

        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::testing::ScriptedGit;
    use std::path::Path;

    #[test]
    fn test_build_from_extractor() {
        let git = ScriptedGit::new()
            .ok("diff --name-only main...feature", "src/foo.ts")
            .ok(
                "diff --stat main...feature",
                " 1 file changed, 20 insertions(+), 5 deletions(-)",
            )
            .ok("log --pretty=format:%s main..feature", "fix: bug")
            .ok(
                "log --pretty=format:%h\u{1f}%s\u{1f}%b\u{1e} main..feature",
                "abc1234\u{1f}fix: bug\u{1f}\u{1e}",
            );
        let extractor = DiffExtractor::new(&git, Path::new("."), "feature", "main");
        let ctx = AnalysisContext::build(&extractor, "feature", "main").unwrap();

        assert_eq!(ctx.changed_files, vec!["src/foo.ts"]);
        assert_eq!(ctx.added_lines, 20);
        assert_eq!(ctx.deleted_lines, 5);
        assert_eq!(ctx.commit_messages, vec!["fix: bug"]);
        assert_eq!(ctx.commits[0].id, "abc1234");
        assert_eq!(ctx.commit_texts()[0].evidence(), "abc1234 fix: bug");
    }

    #[test]
    fn test_build_with_no_changes_skips_statistics() {
        let git = ScriptedGit::new().ok("diff --name-only main...feature", "");
        let extractor = DiffExtractor::new(&git, Path::new("."), "feature", "main");
        let ctx = AnalysisContext::build(&extractor, "feature", "main").unwrap();

        assert!(!ctx.has_changes());
        assert_eq!(git.calls().len(), 1);
    }

    #[test]
    fn test_commit_texts_fall_back_to_subjects() {
        let ctx = AnalysisContext {
            commit_messages: vec!["feat!: drop v1\n\nBREAKING CHANGE: gone".to_string()],
            ..AnalysisContext::default()
        };
        let texts = ctx.commit_texts();
        assert_eq!(texts[0].subject, "feat!: drop v1");
        assert!(texts[0].full.contains("BREAKING CHANGE"));
        assert!(ctx.message_corpus().contains("breaking change"));
    }

    #[test]
    fn test_context_summary() {
        let ctx = AnalysisContext {
            changed_files: vec!["src/lib.rs".to_string()],
            added_lines: 10,
            deleted_lines: 5,
            commit_messages: vec!["feat: add".to_string()],
            branch: "feature/x".to_string(),
            target: "main".to_string(),
            ..AnalysisContext::default()
        };

        let summary = ctx.summary();
        assert!(summary.contains("feature/x -> main"));
        assert!(summary.contains("+10 -5"));
        assert!(summary.contains("Commits: 1"));
    }
}
