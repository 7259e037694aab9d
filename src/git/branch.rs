// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Current and target branch resolution.

use crate::config::GitConfig;
use crate::error::{BranchError, GitError, PrlError, Result};
use std::path::Path;

use super::runner::GitRunner;

/// Branch used when no candidate can be detected.
pub const FALLBACK_TARGET: &str = "main";

/// A named, fallible lookup of the target branch.
type Lookup<'p> = (String, Box<dyn Fn() -> Option<String> + 'p>);

/// Resolves the source branch and the comparison target.
pub struct BranchResolver<'a, R: ?Sized> {
    runner: &'a R,
    cwd: &'a Path,
    config: &'a GitConfig,
}

impl<'a, R: GitRunner + ?Sized> BranchResolver<'a, R> {
    /// Create a resolver for the repository at `cwd`.
    pub fn new(runner: &'a R, cwd: &'a Path, config: &'a GitConfig) -> Self {
        Self {
            runner,
            cwd,
            config,
        }
    }

    /// Get the abbreviated name of the checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        let name = self
            .runner
            .run(&["rev-parse", "--abbrev-ref", "HEAD"], self.cwd)
            .map_err(|e| {
                PrlError::Git(GitError::BranchFailed {
                    message: e.to_string(),
                })
            })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(PrlError::Git(GitError::BranchFailed {
                message: "git returned an empty branch name".to_string(),
            }));
        }
        Ok(name.to_string())
    }

    /// Check whether `refs/heads/<name>` exists.
    pub fn local_exists(&self, name: &str) -> bool {
        let reference = format!("refs/heads/{}", name);
        self.runner
            .succeeds(&["show-ref", "--verify", "--quiet", &reference], self.cwd)
    }

    /// Check whether `refs/remotes/<remote>/<name>` exists.
    pub fn remote_exists(&self, name: &str) -> bool {
        let reference = format!("refs/remotes/{}/{}", self.config.remote, name);
        self.runner
            .succeeds(&["show-ref", "--verify", "--quiet", &reference], self.cwd)
    }

    /// Read the remote's default branch from its symbolic HEAD.
    fn remote_head(&self) -> Option<String> {
        let reference = format!("refs/remotes/{}/HEAD", self.config.remote);
        let output = self
            .runner
            .run(&["symbolic-ref", &reference], self.cwd)
            .ok()?;
        let name = output.trim().rsplit('/').next()?.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    fn lookups(&self) -> Vec<Lookup<'_>> {
        let mut lookups: Vec<Lookup<'_>> = Vec::new();

        for candidate in &self.config.default_targets {
            let local = candidate.clone();
            lookups.push((
                format!("local branch {}", candidate),
                Box::new(move || self.local_exists(&local).then(|| local.clone())),
            ));

            let remote = candidate.clone();
            lookups.push((
                format!("remote branch {}/{}", self.config.remote, candidate),
                Box::new(move || self.remote_exists(&remote).then(|| remote.clone())),
            ));
        }

        lookups.push((
            format!("symbolic HEAD of {}", self.config.remote),
            Box::new(move || self.remote_head()),
        ));

        lookups
    }

    /// Pick the comparison target.
    ///
    /// An explicit target is used verbatim. Otherwise the first successful
    /// lookup wins and [`FALLBACK_TARGET`] is used when none succeeds.
    pub fn resolve_target(&self, explicit: Option<&str>) -> String {
        if let Some(target) = explicit {
            return target.to_string();
        }

        for (description, lookup) in self.lookups() {
            if let Some(target) = lookup() {
                tracing::debug!("Detected target branch '{}' from {}", target, description);
                return target;
            }
        }

        tracing::debug!(
            "No target branch detected, falling back to '{}'",
            FALLBACK_TARGET
        );
        FALLBACK_TARGET.to_string()
    }

    /// Make sure `target` can be diffed against, fetching it if allowed.
    pub fn ensure_available(&self, target: &str, no_fetch: bool) -> Result<()> {
        if self.local_exists(target) {
            tracing::debug!("Target '{}' exists locally", target);
            return Ok(());
        }

        if self.remote_exists(target) {
            tracing::debug!("Target '{}' exists as a remote-tracking branch", target);
            return Ok(());
        }

        if no_fetch {
            return Err(BranchError::FetchDisabled {
                target: target.to_string(),
            }
            .into());
        }

        let refspec = format!("{}:{}", target, target);
        match self
            .runner
            .run(&["fetch", &self.config.remote, &refspec], self.cwd)
        {
            Ok(_) => {
                tracing::debug!("Fetched '{}' from {}", target, self.config.remote);
                return Ok(());
            }
            Err(e) => {
                tracing::debug!("Targeted fetch of '{}' failed: {}", target, e);
            }
        }

        self.runner
            .run_with_retries(&["fetch", &self.config.remote], self.cwd, self.config.retries)
            .map_err(|e| BranchError::FetchFailed {
                target: target.to_string(),
                message: e.to_string(),
            })?;

        if self.remote_exists(target) {
            Ok(())
        } else {
            Err(BranchError::NotFoundInRemote {
                target: target.to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::testing::ScriptedGit;

    fn resolver<'a>(git: &'a ScriptedGit, config: &'a GitConfig) -> BranchResolver<'a, ScriptedGit> {
        BranchResolver::new(git, Path::new("."), config)
    }

    const LOCAL_MAIN: &str = "show-ref --verify --quiet refs/heads/main";
    const REMOTE_MASTER: &str = "show-ref --verify --quiet refs/remotes/origin/master";
    const LOCAL_DEVELOP: &str = "show-ref --verify --quiet refs/heads/develop";

    #[test]
    fn test_explicit_target_used_verbatim() {
        let git = ScriptedGit::new();
        let config = GitConfig::default();
        assert_eq!(resolver(&git, &config).resolve_target(Some("release/1.x")), "release/1.x");
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_detects_local_main_first() {
        let git = ScriptedGit::new()
            .ok(LOCAL_MAIN, "")
            .ok(LOCAL_DEVELOP, "");
        let config = GitConfig::default();
        assert_eq!(resolver(&git, &config).resolve_target(None), "main");
        assert_eq!(git.calls(), vec![LOCAL_MAIN.to_string()]);
    }

    #[test]
    fn test_remote_master_beats_local_develop() {
        let git = ScriptedGit::new().ok(REMOTE_MASTER, "").ok(LOCAL_DEVELOP, "");
        let config = GitConfig::default();
        assert_eq!(resolver(&git, &config).resolve_target(None), "master");
    }

    #[test]
    fn test_symbolic_head_fallback() {
        let git = ScriptedGit::new().ok(
            "symbolic-ref refs/remotes/origin/HEAD",
            "refs/remotes/origin/trunk\n",
        );
        let config = GitConfig::default();
        assert_eq!(resolver(&git, &config).resolve_target(None), "trunk");
    }

    #[test]
    fn test_literal_main_fallback() {
        let git = ScriptedGit::new();
        let config = GitConfig::default();
        assert_eq!(resolver(&git, &config).resolve_target(None), "main");
        // Six ref checks plus the symbolic-ref lookup.
        assert_eq!(git.calls().len(), 7);
    }

    #[test]
    fn test_configured_candidates() {
        let git = ScriptedGit::new().ok("show-ref --verify --quiet refs/remotes/upstream/trunk", "");
        let config = GitConfig {
            remote: "upstream".to_string(),
            retries: 0,
            default_targets: vec!["trunk".to_string()],
        };
        assert_eq!(resolver(&git, &config).resolve_target(None), "trunk");
    }

    #[test]
    fn test_current_branch() {
        let git = ScriptedGit::new().ok("rev-parse --abbrev-ref HEAD", "feature/labels\n");
        let config = GitConfig::default();
        assert_eq!(
            resolver(&git, &config).current_branch().unwrap(),
            "feature/labels"
        );
    }

    #[test]
    fn test_current_branch_failure_is_fatal() {
        let git = ScriptedGit::new().fail("rev-parse --abbrev-ref HEAD", "not a git repository");
        let config = GitConfig::default();
        assert!(matches!(
            resolver(&git, &config).current_branch(),
            Err(PrlError::Git(GitError::BranchFailed { .. }))
        ));
    }

    #[test]
    fn test_available_locally_skips_network() {
        let git = ScriptedGit::new().ok(LOCAL_MAIN, "");
        let config = GitConfig::default();
        resolver(&git, &config).ensure_available("main", false).unwrap();
        assert!(!git.calls().iter().any(|c| c.starts_with("fetch")));
    }

    #[test]
    fn test_available_as_remote_tracking() {
        let git = ScriptedGit::new().ok("show-ref --verify --quiet refs/remotes/origin/main", "");
        let config = GitConfig::default();
        assert!(resolver(&git, &config).ensure_available("main", false).is_ok());
    }

    #[test]
    fn test_no_fetch_fails_with_target_name() {
        let git = ScriptedGit::new();
        let config = GitConfig::default();
        let err = resolver(&git, &config)
            .ensure_available("develop", true)
            .unwrap_err();
        assert!(matches!(
            err,
            PrlError::Branch(BranchError::FetchDisabled { ref target }) if target == "develop"
        ));
        assert!(err.to_string().contains("--no-fetch"));
        assert!(!git.calls().iter().any(|c| c.starts_with("fetch")));
    }

    #[test]
    fn test_targeted_fetch_success() {
        let git = ScriptedGit::new().ok("fetch origin main:main", "");
        let config = GitConfig::default();
        resolver(&git, &config).ensure_available("main", false).unwrap();
        assert!(!git.called("fetch origin"));
    }

    #[test]
    fn test_full_fetch_fallback_then_found() {
        // The remote ref only shows up after the full fetch; the scripted
        // runner is static, so model it with a dedicated runner.
        struct AfterFetch(std::cell::Cell<bool>);
        impl GitRunner for AfterFetch {
            fn run(&self, args: &[&str], _cwd: &Path) -> Result<String> {
                match args.join(" ").as_str() {
                    "fetch origin" => {
                        self.0.set(true);
                        Ok(String::new())
                    }
                    "show-ref --verify --quiet refs/remotes/origin/develop" if self.0.get() => {
                        Ok(String::new())
                    }
                    other => Err(PrlError::Git(GitError::CommandFailed {
                        command: other.to_string(),
                        message: "no".to_string(),
                    })),
                }
            }
        }

        let git = AfterFetch(std::cell::Cell::new(false));
        let config = GitConfig::default();
        let resolver = BranchResolver::new(&git, Path::new("."), &config);
        assert!(resolver.ensure_available("develop", false).is_ok());
    }

    #[test]
    fn test_not_found_in_remote() {
        let git = ScriptedGit::new().ok("fetch origin", "");
        let config = GitConfig::default();
        let err = resolver(&git, &config)
            .ensure_available("nope", false)
            .unwrap_err();
        assert!(matches!(
            err,
            PrlError::Branch(BranchError::NotFoundInRemote { .. })
        ));
    }

    #[test]
    fn test_full_fetch_failure_keeps_cause() {
        let git = ScriptedGit::new().fail("fetch origin", "Could not resolve host: example.com");
        let config = GitConfig::default();
        let err = resolver(&git, &config)
            .ensure_available("main", false)
            .unwrap_err();
        assert!(matches!(err, PrlError::Branch(BranchError::FetchFailed { .. })));
        assert!(err.to_string().contains("Could not resolve host"));
        // One initial attempt plus the configured retry.
        let fetches = git.calls().iter().filter(|c| *c == "fetch origin").count();
        assert_eq!(fetches, 2);
    }
}
