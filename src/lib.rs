//! quickcommit - A CLI tool that writes commit messages from working tree changes.
//!
//! # Overview
//!
//! quickcommit reads `git status`, classifies each changed path as added,
//! modified, deleted or renamed, labels every file with a short heuristic
//! description, and assembles a commit message it can stage, commit and push.
//! A companion binary, `quickcommit-init`, creates a GitHub repository for the
//! project through the `gh` CLI.

pub mod bootstrap;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod manifest;
pub mod workflow;

// Re-export commonly used types
pub use commit::{FileDescriptions, GeneratedMessage, generate_commit_message};
pub use error::{BootstrapError, HostingError, ManifestError, VcsError, WorkflowError};
pub use git::{ChangeSet, ChangedFile, FileStatus, GitCli, VersionControlClient, parse_status};
pub use github::{GhCli, HostingClient};
