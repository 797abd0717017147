//! Error types for quickcommit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from version-control operations.
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },

    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to collect diff: {0}")]
    Diff(#[source] git2::Error),

    #[error("git produced output that is not valid UTF-8: {0}")]
    InvalidOutput(String),
}

/// Errors from the commit workflow (status, stage, commit, push).
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Not a git repository: {}. Run 'git init' first.", .0.display())]
    NotARepository(PathBuf),

    #[error("Failed to read working tree status: {0}")]
    Status(#[source] VcsError),

    #[error("Failed to stage changes: {0}")]
    Staging(#[source] VcsError),

    #[error("Failed to create commit: {0}")]
    Commit(#[source] VcsError),

    #[error("Failed to push: {0}")]
    Push(#[source] VcsError),
}

/// Errors from the hosting provider CLI (`gh`).
#[derive(Error, Debug)]
pub enum HostingError {
    #[error("Failed to run gh {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("gh {operation} exited with code {code}: {stderr}")]
    CommandFailed {
        operation: String,
        code: i32,
        stderr: String,
    },
}

/// Fatal errors from repository bootstrap preconditions.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(
        "GitHub CLI (gh) not found.\n\n\
             Install it from https://cli.github.com and try again:\n  \
             brew install gh          (macOS)\n  \
             apt install gh           (Debian/Ubuntu)\n  \
             winget install GitHub.cli (Windows)"
    )]
    CliMissing,

    #[error("GitHub CLI is not authenticated. Run 'gh auth login' and try again.")]
    NotAuthenticated,

    #[error("Failed to initialize git repository: {0}")]
    InitFailed(#[source] VcsError),
}

impl BootstrapError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Errors reading a project manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {reason}", .path.display())]
    ParseFailed { path: PathBuf, reason: String },
}
