// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! All repository access goes through [`GitRunner`] and is read-only apart
//! from fetching the comparison target.

pub mod branch;
pub mod diff;
mod repo;
pub mod runner;

pub use branch::{BranchResolver, FALLBACK_TARGET};
pub use diff::{CommitInfo, DiffExtractor, LineChanges};
pub use repo::{ensure_git_installed, Repository};
pub use runner::{GitCli, GitRunner};
