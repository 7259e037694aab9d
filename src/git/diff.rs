// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Diff and history extraction between two branches.
//!
//! `git diff` is always asked for the merge-base relative `target...branch`
//! range, falling back to a plain `target branch` comparison when no merge
//! base is available. `git log` uses `target..branch`, which lists the same
//! set of commits: the ones introduced by `branch` since it diverged.
//!
//! The changed file list drives control flow, so failing to obtain it is an
//! error. Line counts and commit data only feed confidence scores and
//! degrade to empty values instead.

use crate::error::{GitError, PrlError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use super::runner::GitRunner;

lazy_static! {
    static ref INSERTIONS: Regex = Regex::new(r"(\d+) insertions?\(\+\)").unwrap();
    static ref DELETIONS: Regex = Regex::new(r"(\d+) deletions?\(-\)").unwrap();
}

const FIELD_SEP: char = '\u{1f}';
const RECORD_SEP: char = '\u{1e}';

/// Aggregate line counts across a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineChanges {
    pub added: usize,
    pub deleted: usize,
}

impl LineChanges {
    /// Total lines touched.
    pub fn total(&self) -> usize {
        self.added + self.deleted
    }
}

/// A commit in the compared range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitInfo {
    /// Abbreviated hash.
    pub id: String,
    /// Subject line.
    pub message: String,
    /// Subject and body, or the subject alone when there is no body.
    pub full_message: String,
}

/// Extracts the raw facts about `branch` relative to `target`.
pub struct DiffExtractor<'a, R: ?Sized> {
    runner: &'a R,
    cwd: &'a Path,
    branch: &'a str,
    target: &'a str,
}

impl<'a, R: GitRunner + ?Sized> DiffExtractor<'a, R> {
    pub fn new(runner: &'a R, cwd: &'a Path, branch: &'a str, target: &'a str) -> Self {
        Self {
            runner,
            cwd,
            branch,
            target,
        }
    }

    fn diff_ranges(&self) -> Vec<Vec<String>> {
        vec![
            vec![format!("{}...{}", self.target, self.branch)],
            vec![self.target.to_string(), self.branch.to_string()],
        ]
    }

    fn log_range(&self) -> String {
        format!("{}..{}", self.target, self.branch)
    }

    /// Run `git diff <flag> <range>` for each range strategy until one works.
    fn diff_with_fallback(&self, flag: &str) -> Result<String> {
        let mut last_error = None;

        for range in self.diff_ranges() {
            let mut args = vec!["diff", flag];
            args.extend(range.iter().map(String::as_str));

            match self.runner.run(&args, self.cwd) {
                Ok(output) => return Ok(output),
                Err(e) => {
                    tracing::debug!("git {} failed: {}", args.join(" "), e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            PrlError::Git(GitError::DiffFailed {
                message: "no diff strategy available".to_string(),
            })
        }))
    }

    /// List the paths changed on `branch`.
    pub fn changed_files(&self) -> Result<Vec<String>> {
        let output = self.diff_with_fallback("--name-only").map_err(|e| {
            PrlError::Git(GitError::DiffFailed {
                message: format!(
                    "could not list changes between '{}' and '{}': {}",
                    self.target, self.branch, e
                ),
            })
        })?;

        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Count inserted and deleted lines. Zero on failure.
    pub fn line_changes(&self) -> LineChanges {
        match self.diff_with_fallback("--stat") {
            Ok(output) => parse_stat_summary(&output),
            Err(e) => {
                tracing::warn!("Line statistics unavailable, assuming no changes: {}", e);
                LineChanges::default()
            }
        }
    }

    /// Subject lines of the commits in range. Empty on failure.
    pub fn commit_messages(&self) -> Vec<String> {
        let range = self.log_range();
        match self
            .runner
            .run(&["log", "--pretty=format:%s", &range], self.cwd)
        {
            Ok(output) => output
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) => {
                tracing::warn!("Commit messages unavailable: {}", e);
                Vec::new()
            }
        }
    }

    /// Id, subject and full message of the commits in range. Empty on failure.
    pub fn detailed_commits(&self) -> Vec<CommitInfo> {
        let range = self.log_range();
        let pretty = format!("--pretty=format:%h{}%s{}%b{}", FIELD_SEP, FIELD_SEP, RECORD_SEP);
        match self.runner.run(&["log", &pretty, &range], self.cwd) {
            Ok(output) => parse_detailed_log(&output),
            Err(e) => {
                tracing::warn!("Commit details unavailable: {}", e);
                Vec::new()
            }
        }
    }
}

/// Parse the summary line of `git diff --stat`.
///
/// Only English git output is understood; anything else yields zeros.
pub fn parse_stat_summary(output: &str) -> LineChanges {
    let summary = output
        .lines()
        .rev()
        .find(|line| line.contains("changed"))
        .unwrap_or("");

    let count = |re: &Regex| {
        re.captures(summary)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    LineChanges {
        added: count(&INSERTIONS),
        deleted: count(&DELETIONS),
    }
}

/// Parse log output written with unit/record separators.
pub fn parse_detailed_log(output: &str) -> Vec<CommitInfo> {
    output
        .split(RECORD_SEP)
        .filter_map(|record| {
            let record = record.trim_start_matches(|c: char| c == '\n' || c == '\r');
            if record.trim().is_empty() {
                return None;
            }

            let mut fields = record.splitn(3, FIELD_SEP);
            let id = fields.next()?.trim().to_string();
            let message = fields.next().unwrap_or("").trim().to_string();
            let body = fields.next().unwrap_or("").trim();

            let full_message = if body.is_empty() {
                message.clone()
            } else {
                format!("{}\n\n{}", message, body)
            };

            Some(CommitInfo {
                id,
                message,
                full_message,
            })
        })
        .collect()
}
