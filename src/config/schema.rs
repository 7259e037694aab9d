// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from prl.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for prl.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrlConfig {
    /// Git invocation settings.
    pub git: GitConfig,

    /// Size label thresholds.
    pub size: SizeThresholds,

    /// Label heuristics settings.
    pub labels: LabelsConfig,

    /// Output defaults.
    pub output: OutputConfig,
}

impl PrlConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Git invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote used for target detection and fetching.
    pub remote: String,

    /// Extra attempts for a failing fetch.
    pub retries: u32,

    /// Candidate target branches, tried in order.
    pub default_targets: Vec<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            retries: 1,
            default_targets: vec![
                "main".to_string(),
                "master".to_string(),
                "develop".to_string(),
            ],
        }
    }
}

/// Thresholds for the size label.
///
/// A diff is small when it has fewer than `small_max_lines` changed lines
/// and at most `small_max_files` files; medium under the `medium_*` limits;
/// large otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeThresholds {
    pub small_max_lines: usize,
    pub small_max_files: usize,
    pub medium_max_lines: usize,
    pub medium_max_files: usize,
}

impl Default for SizeThresholds {
    fn default() -> Self {
        Self {
            small_max_lines: 50,
            small_max_files: 3,
            medium_max_lines: 200,
            medium_max_files: 10,
        }
    }
}

/// Label heuristics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Whether to suggest `scope:*` labels from file paths.
    pub scope: bool,

    /// Glob patterns identifying hotfix branches.
    pub hotfix_branches: Vec<String>,

    /// Manifest and lock file names that signal dependency updates.
    pub dependency_files: Vec<String>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            scope: true,
            hotfix_branches: vec!["hotfix/*".to_string()],
            dependency_files: DEFAULT_DEPENDENCY_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Manifest and lock files recognised out of the box.
pub const DEFAULT_DEPENDENCY_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "requirements.txt",
    "Pipfile",
    "Pipfile.lock",
    "composer.json",
    "composer.lock",
    "Gemfile",
    "Gemfile.lock",
    "go.mod",
    "go.sum",
];

/// Output defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    pub format: String,

    /// Include label colors in the rendering.
    pub colors: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            colors: false,
        }
    }
}
