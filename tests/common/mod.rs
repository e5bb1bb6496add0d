// tests/common/mod.rs

//! Shared fixtures for integration tests.
//!
//! Builds throwaway git repositories so the repository queries run
//! against real history instead of canned strings.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// True when a usable git binary is on PATH.
///
/// Tests that need a live repository call this first and return early
/// when git is missing.
pub fn git_available() -> bool {
    amanzi_forge::docs::is_git_available()
}

fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a repository with one commit on `main` and the given tags.
///
/// Returns (TempDir, repo_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_tagged_repo(tags: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let repo = temp_dir.path().to_path_buf();

    git(&repo, &["init", "--quiet", "--initial-branch=main"]);
    git(&repo, &["config", "user.name", "Fixture"]);
    git(&repo, &["config", "user.email", "fixture@example.com"]);

    std::fs::write(repo.join("README.md"), "fixture repository\n").unwrap();
    git(&repo, &["add", "README.md"]);
    git(&repo, &["commit", "--quiet", "-m", "initial import"]);

    for tag in tags {
        git(&repo, &["tag", tag]);
    }

    (temp_dir, repo)
}
