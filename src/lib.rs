// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! PRL - Pull Request Label suggestions
//!
//! Inspects the diff and commit history between a branch and its target and
//! suggests labels with confidence scores.
//!
//! # Features
//!
//! - **Size**: small, medium or large from changed lines and files
//! - **Type**: bug, feature, docs, refactor, test and chore from commit messages
//! - **Scope**: affected areas from changed paths
//! - **Release impact**: breaking change, minor or patch
//! - **Flags**: breaking changes, dependency updates, missing docs or tests
//! - **Output**: json, table, list, txt and csv
//!
//! # Example
//!
//! ```
//! use prl::analysis::{analyze, AnalysisContext};
//! use prl::config::PrlConfig;
//! use prl::output::{render, OutputFormat};
//!
//! let ctx = AnalysisContext {
//!     changed_files: vec!["src/foo.ts".to_string()],
//!     added_lines: 20,
//!     deleted_lines: 5,
//!     commit_messages: vec!["fix: bug".to_string()],
//!     ..AnalysisContext::default()
//! };
//!
//! let labels = analyze(&ctx, &PrlConfig::default());
//! assert!(render(&labels, OutputFormat::Csv, false).contains("type:bug"));
//! ```

// Module declarations
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod labels;
pub mod output;
pub mod suggest;

// Re-exports for convenience
pub use config::PrlConfig;
pub use error::{PrlError, Result};
pub use labels::{LabelFlags, LabelSuggestion, SuggestedLabels};
pub use suggest::{suggest_labels, SuggestOptions, SuggestOutcome};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of prl.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
