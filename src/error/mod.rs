// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the prl application.
//!
//! Fatal conditions (missing git, not a repository, an unresolvable target
//! branch) are modelled here. Advisory failures inside the diff extractor never
//! reach this module: they degrade to empty defaults instead.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for prl operations.
#[derive(Error, Debug)]
pub enum PrlError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Target branch errors
    #[error("{0}")]
    Branch(#[from] BranchError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl PrlError {
    /// A short actionable hint for the user, if one applies.
    pub fn tip(&self) -> Option<String> {
        match self {
            PrlError::Git(GitError::NotInstalled) => {
                Some("Install git and make sure it is on your PATH".to_string())
            }
            PrlError::Git(GitError::NotARepository) => {
                Some("Run this command from inside a git repository".to_string())
            }
            PrlError::Branch(BranchError::FetchDisabled { target }) => Some(format!(
                "Remove --no-fetch to allow automatic fetching, or run `git fetch origin {}` first",
                target
            )),
            PrlError::Branch(BranchError::NotFoundInRemote { .. }) => {
                Some("Pass an existing branch with --target".to_string())
            }
            PrlError::Branch(BranchError::FetchFailed { .. }) => {
                Some("Check your network connection and remote access, or use --no-fetch".to_string())
            }
            _ => None,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found")]
    NotInstalled,

    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to get diff: {message}")]
    DiffFailed { message: String },

    #[error("Failed to get branch: {message}")]
    BranchFailed { message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Target branch availability errors.
#[derive(Error, Debug)]
pub enum BranchError {
    #[error("Target branch '{target}' is not available locally and fetching is disabled (--no-fetch)")]
    FetchDisabled { target: String },

    #[error("Target branch '{target}' not found in remote repository")]
    NotFoundInRemote { target: String },

    #[error("Failed to fetch from remote while looking for '{target}': {message}")]
    FetchFailed { target: String, message: String },
}

/// Result type alias for prl operations.
pub type Result<T> = std::result::Result<T, PrlError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PrlError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
