//! Version-control capability used by the commit workflow and bootstrap.
//!
//! Mutating operations shell out to the system `git` binary, inheriting the
//! user's git config, SSH agent, and credential store. Read-only inspection
//! (repository detection, per-file diffs) goes through git2.

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository;
use tracing::debug;

use super::diff::diff_path;
use crate::error::VcsError;

/// Operations the workflow needs from version control.
///
/// This abstraction allows driving the workflow with fakes in tests.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControlClient {
    /// Whether the working tree is inside a git repository.
    fn is_repository(&self) -> bool;

    /// Top-level directory of the working tree. Status paths are relative
    /// to it, not to the directory the client was created for.
    fn workdir(&self) -> Option<PathBuf>;

    /// Raw `git status --porcelain` output, with untracked files listed
    /// individually and paths left unescaped.
    fn status(&self) -> Result<String, VcsError>;

    /// Unified diff of one path against the last commit.
    fn diff(&self, path: &str) -> Result<String, VcsError>;

    /// Stage every change, including untracked files.
    fn stage_all(&self) -> Result<(), VcsError>;

    fn commit(&self, message: &str) -> Result<(), VcsError>;

    /// Push the current branch to its configured upstream.
    fn push(&self) -> Result<(), VcsError>;

    /// Push the current branch to `remote` and set it as upstream.
    fn push_upstream(&self, remote: &str) -> Result<(), VcsError>;

    /// Create a new repository at the working-tree root.
    fn init(&self) -> Result<(), VcsError>;
}

/// [`VersionControlClient`] backed by the `git` CLI and git2.
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn open(&self) -> Result<Repository, VcsError> {
        Repository::discover(&self.root).map_err(VcsError::OpenRepository)
    }

    /// Run a git command in the working tree and return its stdout.
    fn run_git(&self, args: &[&str], operation: &str) -> Result<String, VcsError> {
        debug!("Running git {} in {}", args.join(" "), self.root.display());

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .map_err(|source| VcsError::SpawnFailed {
                operation: operation.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VcsError::CommandFailed {
                operation: operation.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| VcsError::InvalidOutput(e.to_string()))
    }
}

impl VersionControlClient for GitCli {
    fn is_repository(&self) -> bool {
        self.open().is_ok()
    }

    fn workdir(&self) -> Option<PathBuf> {
        let repo = self.open().ok()?;
        repo.workdir().map(Path::to_path_buf)
    }

    fn status(&self) -> Result<String, VcsError> {
        self.run_git(
            &[
                "-c",
                "core.quotePath=false",
                "status",
                "--porcelain",
                "--untracked-files=all",
            ],
            "status",
        )
    }

    fn diff(&self, path: &str) -> Result<String, VcsError> {
        let repo = self.open()?;
        diff_path(&repo, path)
    }

    fn stage_all(&self) -> Result<(), VcsError> {
        self.run_git(&["add", "-A"], "add").map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<(), VcsError> {
        self.run_git(&["commit", "-m", message], "commit").map(|_| ())
    }

    fn push(&self) -> Result<(), VcsError> {
        self.run_git(&["push"], "push").map(|_| ())
    }

    fn push_upstream(&self, remote: &str) -> Result<(), VcsError> {
        self.run_git(&["push", "-u", remote, "HEAD"], "push").map(|_| ())
    }

    fn init(&self) -> Result<(), VcsError> {
        self.run_git(&["init"], "init").map(|_| ())
    }
}
