//! Commit message assembly from a classified change set.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::commit::describe::{FileDescriptions, describe_changes};
use crate::git::{ChangeSet, FileStatus, VersionControlClient, parse_status};

/// Default number of files per category that still get per-file detail.
pub const DEFAULT_DETAIL_LIMIT: usize = 2;

/// Message used when the status lists changes but none fall into a category.
pub const FALLBACK_MESSAGE: &str = "Update project files";

/// Sentinel text for a clean working tree.
pub const NO_CHANGES_MESSAGE: &str = "No changes to commit";

/// Result of commit message generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedMessage {
    /// The status was empty; nothing should be staged or committed.
    NoChanges,
    Message(String),
}

impl GeneratedMessage {
    pub fn as_message(&self) -> Option<&str> {
        match self {
            GeneratedMessage::NoChanges => None,
            GeneratedMessage::Message(m) => Some(m),
        }
    }

    pub fn is_no_changes(&self) -> bool {
        matches!(self, GeneratedMessage::NoChanges)
    }
}

impl fmt::Display for GeneratedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedMessage::NoChanges => f.write_str(NO_CHANGES_MESSAGE),
            GeneratedMessage::Message(m) => f.write_str(m),
        }
    }
}

/// Emoji and verb for a category's summary line.
fn summary_prefix(status: FileStatus) -> (&'static str, &'static str) {
    match status {
        FileStatus::Added => ("✨", "Add"),
        FileStatus::Modified => ("🔧", "Update"),
        FileStatus::Deleted => ("🗑️", "Remove"),
        FileStatus::Renamed => ("🚚", "Rename"),
    }
}

fn pluralize(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

/// Summary line for one category, or `None` when the category is empty.
fn category_line(
    status: FileStatus,
    paths: &[&str],
    descriptions: &FileDescriptions,
    detail_limit: usize,
) -> Option<String> {
    if paths.is_empty() {
        return None;
    }

    let (emoji, verb) = summary_prefix(status);
    let count = paths.len();
    let noun = match status {
        FileStatus::Added => format!("new {}", pluralize(count)),
        _ => pluralize(count).to_string(),
    };

    let mut line = format!("{emoji} {verb} {count} {noun}");

    if count <= detail_limit {
        let details: Vec<&str> = paths
            .iter()
            .filter_map(|p| descriptions.get(p))
            .collect();
        if !details.is_empty() {
            line.push_str(": ");
            line.push_str(&details.join(", "));
        }
    }

    Some(line)
}

/// Build the commit message: one line per non-empty category in the order
/// added, modified, deleted, renamed.
pub fn assemble_message(
    changes: &ChangeSet,
    descriptions: &FileDescriptions,
    detail_limit: usize,
) -> String {
    let lines: Vec<String> = FileStatus::ALL
        .iter()
        .filter_map(|&status| {
            category_line(status, &changes.paths(status), descriptions, detail_limit)
        })
        .collect();

    if lines.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }

    lines.join("\n")
}

/// Parse `status`, describe every change and assemble the message.
///
/// Blank status text short-circuits to [`GeneratedMessage::NoChanges`]
/// without touching the file system or version control. Status that lists
/// only unhandled codes still yields a message ([`FALLBACK_MESSAGE`]).
/// Added files are read relative to `root`, the working-tree top level.
pub fn generate_commit_message<V: VersionControlClient + ?Sized>(
    status: &str,
    root: &Path,
    vcs: &V,
    detail_limit: usize,
) -> GeneratedMessage {
    if status.trim().is_empty() {
        return GeneratedMessage::NoChanges;
    }

    let changes = parse_status(status);
    debug!("Classified {} changed files", changes.len());

    let descriptions = describe_changes(&changes, root, vcs);
    GeneratedMessage::Message(assemble_message(&changes, &descriptions, detail_limit))
}
