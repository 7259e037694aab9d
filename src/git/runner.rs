// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git command execution.

use crate::error::{GitError, PrlError, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// Runs git subcommands in a working directory.
///
/// Everything above this trait treats git as an opaque tool: a command either
/// produces stdout or fails.
pub trait GitRunner {
    /// Run `git <args>` in `cwd` and return its stdout.
    fn run(&self, args: &[&str], cwd: &Path) -> Result<String>;

    /// Run a command, re-running it up to `retries` extra times on failure.
    fn run_with_retries(&self, args: &[&str], cwd: &Path, retries: u32) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.run(args, cwd) {
                Ok(output) => return Ok(output),
                // A missing binary will not appear on retry.
                Err(PrlError::Git(GitError::NotInstalled)) => {
                    return Err(PrlError::Git(GitError::NotInstalled))
                }
                Err(e) if attempt < retries => {
                    attempt += 1;
                    tracing::debug!(
                        "git {} failed (attempt {}/{}): {}",
                        args.join(" "),
                        attempt,
                        retries + 1,
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run a command only for its exit status.
    fn succeeds(&self, args: &[&str], cwd: &Path) -> bool {
        self.run(args, cwd).is_ok()
    }
}

/// Runs the `git` executable found on PATH.
#[derive(Debug, Clone, Default)]
pub struct GitCli;

impl GitCli {
    /// Create a new runner.
    pub fn new() -> Self {
        Self
    }
}

impl GitRunner for GitCli {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!("Running `{}` in {}", command, cwd.display());

        // Non-ASCII paths are printed verbatim instead of C-quoted.
        let output = Command::new("git")
            .args(["-c", "core.quotePath=false"])
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    PrlError::Git(GitError::NotInstalled)
                } else {
                    PrlError::Git(GitError::CommandFailed {
                        command: command.clone(),
                        message: e.to_string(),
                    })
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!("`{}` exited with {}: {}", command, output.status, stderr);
            return Err(PrlError::Git(GitError::CommandFailed {
                command,
                message: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A scripted runner for exercising git-facing code without a repository.

    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Answers commands from a script keyed by the joined argument list.
    /// Unscripted commands fail.
    #[derive(Debug, Default)]
    pub struct ScriptedGit {
        responses: HashMap<String, std::result::Result<String, String>>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedGit {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn ok(mut self, command: &str, output: &str) -> Self {
            self.responses
                .insert(command.to_string(), Ok(output.to_string()));
            self
        }

        pub fn fail(mut self, command: &str, message: &str) -> Self {
            self.responses
                .insert(command.to_string(), Err(message.to_string()));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn called(&self, command: &str) -> bool {
            self.calls.borrow().iter().any(|c| c == command)
        }
    }

    impl GitRunner for ScriptedGit {
        fn run(&self, args: &[&str], _cwd: &Path) -> Result<String> {
            let command = args.join(" ");
            self.calls.borrow_mut().push(command.clone());
            match self.responses.get(&command) {
                Some(Ok(output)) => Ok(output.clone()),
                Some(Err(message)) => Err(PrlError::Git(GitError::CommandFailed {
                    command: format!("git {}", command),
                    message: message.clone(),
                })),
                None => Err(PrlError::Git(GitError::CommandFailed {
                    command: format!("git {}", command),
                    message: "unscripted command".to_string(),
                })),
            }
        }
    }
}
