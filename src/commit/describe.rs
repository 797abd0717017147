//! Per-file descriptions for a [`ChangeSet`].
//!
//! Analysis failures (unreadable files, binary content, diff errors) fall back
//! to a generic label for that file only; the run always continues.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::commit::classify::{ADDED_RULES, FileContext, MODIFIED_RULES, classify};
use crate::git::{ChangeSet, FileStatus, VersionControlClient};

/// Label for an added file whose content could not be read.
pub const ADDED_FALLBACK: &str = "new file";
/// Label for a modified file whose diff could not be computed.
pub const MODIFIED_FALLBACK: &str = "update file";
pub const DELETED_LABEL: &str = "deleted file";
pub const RENAMED_LABEL: &str = "renamed file";

/// Descriptions keyed by changed path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDescriptions {
    by_path: HashMap<String, String>,
}

impl FileDescriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, description: impl Into<String>) {
        self.by_path.insert(path.into(), description.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

/// Describe every file in the change set.
///
/// Added files are read from `root`; modified files are diffed through `vcs`.
pub fn describe_changes<V: VersionControlClient + ?Sized>(
    changes: &ChangeSet,
    root: &Path,
    vcs: &V,
) -> FileDescriptions {
    let mut descriptions = FileDescriptions::new();

    for file in changes.files() {
        let description = match file.status {
            FileStatus::Added => describe_added(root, &file.path),
            FileStatus::Modified => describe_modified(vcs, &file.path),
            FileStatus::Deleted => DELETED_LABEL.to_string(),
            FileStatus::Renamed => RENAMED_LABEL.to_string(),
        };
        debug!("{} ({}): {}", file.path, file.status, description);
        descriptions.insert(file.path.clone(), description);
    }

    descriptions
}

/// Label a newly added file from its content.
pub fn describe_added(root: &Path, path: &str) -> String {
    match std::fs::read_to_string(root.join(path)) {
        Ok(content) => describe_added_content(path, &content),
        Err(e) => {
            debug!("Could not read {}: {}", path, e);
            ADDED_FALLBACK.to_string()
        }
    }
}

/// Label a newly added file from content already in memory.
pub fn describe_added_content(path: &str, content: &str) -> String {
    classify(ADDED_RULES, &FileContext::new(path, content))
        .unwrap_or_else(|| ADDED_FALLBACK.to_string())
}

/// Label a modified file from its diff against the last commit.
pub fn describe_modified<V: VersionControlClient + ?Sized>(vcs: &V, path: &str) -> String {
    match vcs.diff(path) {
        Ok(diff) => describe_modified_diff(path, &diff),
        Err(e) => {
            debug!("Could not diff {}: {}", path, e);
            MODIFIED_FALLBACK.to_string()
        }
    }
}

/// Label a modified file from diff text already in memory.
pub fn describe_modified_diff(path: &str, diff: &str) -> String {
    classify(MODIFIED_RULES, &FileContext::new(path, diff))
        .unwrap_or_else(|| MODIFIED_FALLBACK.to_string())
}
