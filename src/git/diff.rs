//! Per-path diff against the last commit using git2.

use git2::{DiffFormat, DiffOptions, ErrorCode, Repository, Tree};
use tracing::warn;

use crate::error::VcsError;

/// Maximum characters of diff text kept per file.
const MAX_DIFF_LENGTH: usize = 30_000;

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, VcsError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None);
        }
        Err(e) => return Err(VcsError::Diff(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(VcsError::Diff)?;
    Ok(Some(tree))
}

/// Unified diff of one path between HEAD and the working tree (staged and
/// unstaged changes combined).
///
/// Binary hunks produce no text; an empty string is a valid result.
pub fn diff_path(repo: &Repository, path: &str) -> Result<String, VcsError> {
    let head_tree = resolve_head_tree(repo)?;

    let mut opts = DiffOptions::new();
    opts.pathspec(path).disable_pathspec_match(true);

    let diff = repo
        .diff_tree_to_workdir_with_index(head_tree.as_ref(), Some(&mut opts))
        .map_err(VcsError::Diff)?;

    let mut text = String::new();
    let mut truncated = false;

    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if truncated {
            return true;
        }

        let content = String::from_utf8_lossy(line.content());
        if text.len() + content.len() + 1 > MAX_DIFF_LENGTH {
            warn!("Diff for {} truncated at {} chars", path, MAX_DIFF_LENGTH);
            truncated = true;
            return true;
        }

        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(&content);

        true
    })
    .map_err(VcsError::Diff)?;

    Ok(text)
}
