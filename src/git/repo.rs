// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery.

use crate::error::{GitError, PrlError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

use super::runner::GitRunner;

/// A discovered, non-bare git repository.
pub struct Repository {
    workdir: PathBuf,
}

impl Repository {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                PrlError::Git(GitError::NotARepository)
            } else {
                PrlError::Git(GitError::from(e))
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                PrlError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self { workdir })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

/// Check that the git executable can be run at all.
pub fn ensure_git_installed<R: GitRunner + ?Sized>(runner: &R, cwd: &Path) -> Result<()> {
    match runner.run(&["--version"], cwd) {
        Ok(version) => {
            tracing::debug!("Using {}", version);
            Ok(())
        }
        Err(PrlError::Git(GitError::NotInstalled)) => Err(PrlError::Git(GitError::NotInstalled)),
        Err(e) => {
            tracing::debug!("git --version failed: {}", e);
            Err(PrlError::Git(GitError::NotInstalled))
        }
    }
}
