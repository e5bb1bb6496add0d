// src/docs/gitinfo.rs

//! Query repository state from git
//!
//! The documentation build stamps its output with the branch, commit and
//! release tags of the checkout it runs in. All three come from the `git`
//! command line; any failure is fatal since there is no sensible fallback
//! to bake into published documentation.

use crate::docs::version::RELEASE_TAG_PATTERN;
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Version-control state a documentation build is stamped with
#[derive(Debug, Clone)]
pub struct RepoInfo {
    pub branch: String,
    pub commit: String,
    pub tags: Vec<String>,
}

/// Runs git queries, optionally against an explicit working directory
#[derive(Debug, Clone, Default)]
pub struct GitQuery {
    repo_dir: Option<PathBuf>,
}

impl GitQuery {
    /// Query the repository containing the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Query an explicit repository directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        GitQuery {
            repo_dir: Some(dir.into()),
        }
    }

    /// Current branch name
    pub fn branch(&self) -> Result<String> {
        self.run(&["symbolic-ref", "--short", "HEAD"])
    }

    /// Abbreviated commit id of HEAD
    pub fn commit(&self) -> Result<String> {
        self.run(&["rev-parse", "--short", "HEAD"])
    }

    /// Tags matching the release naming pattern
    pub fn release_tags(&self) -> Result<Vec<String>> {
        let listing = self.run(&["tag", "-l", RELEASE_TAG_PATTERN])?;
        Ok(listing.split_whitespace().map(|s| s.to_string()).collect())
    }

    /// Gather everything the documentation build needs in one pass
    pub fn gather(&self) -> Result<RepoInfo> {
        Ok(RepoInfo {
            branch: self.branch()?,
            commit: self.commit()?,
            tags: self.release_tags()?,
        })
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        debug!("Running git {}", args.join(" "));

        let mut command = Command::new("git");
        if let Some(dir) = &self.repo_dir {
            command.current_dir(dir);
        }

        let output = command
            .args(args)
            .output()
            .map_err(|e| Error::GitError(format!("Failed to run git: {}. Is git installed?", e)))?;

        if !output.status.success() {
            return Err(Error::GitError(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Check if git is available on this system
pub fn is_git_available() -> bool {
    Command::new("git")
        .args(["--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
