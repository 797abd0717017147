//! Commit workflow: status, stage, message, commit, push.
//!
//! Each step's failure aborts the remaining steps.

use tracing::debug;

use crate::commit::{GeneratedMessage, generate_commit_message};
use crate::config::CommitConfig;
use crate::error::WorkflowError;
use crate::git::VersionControlClient;

/// How a workflow run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The working tree was clean; nothing was staged.
    NothingToCommit,
    /// Dry run: the message that would have been committed.
    DryRun { message: GeneratedMessage },
    /// Changes were committed and pushed.
    Pushed { message: String },
}

/// Run the commit workflow against `vcs`.
pub fn run_commit<V: VersionControlClient + ?Sized>(
    config: &CommitConfig,
    vcs: &V,
) -> Result<WorkflowOutcome, WorkflowError> {
    // ── Step 1: Repository check ──
    if !vcs.is_repository() {
        return Err(WorkflowError::NotARepository(config.root.clone()));
    }
    let root = vcs.workdir().unwrap_or_else(|| config.root.clone());
    debug!("Working tree root: {}", root.display());

    // ── Step 2: Status ──
    let status = vcs.status().map_err(WorkflowError::Status)?;
    if status.trim().is_empty() {
        println!("No changes to commit. Working tree is clean.");
        return Ok(WorkflowOutcome::NothingToCommit);
    }

    println!("Changes:");
    println!("{}", status.trim_end());
    println!();

    // ── Dry run: read-only preview ──
    if config.dry_run {
        let message =
            generate_commit_message(&as_staged(&status), &root, vcs, config.detail_limit);

        println!("Commit message:");
        println!("{}", message);
        println!();
        println!("Dry run complete. No changes made.");
        return Ok(WorkflowOutcome::DryRun { message });
    }

    // ── Step 3: Stage ──
    vcs.stage_all().map_err(WorkflowError::Staging)?;
    println!("  [DONE] Staged all changes");

    // ── Step 4: Message ──
    // Re-read so newly staged untracked files show up as added.
    let staged = vcs.status().map_err(WorkflowError::Status)?;
    let message = match generate_commit_message(&staged, &root, vcs, config.detail_limit) {
        GeneratedMessage::Message(message) => message,
        GeneratedMessage::NoChanges => {
            println!("No changes to commit after staging.");
            return Ok(WorkflowOutcome::NothingToCommit);
        }
    };

    println!();
    println!("Commit message:");
    println!("{}", message);
    println!();

    // ── Step 5: Commit ──
    vcs.commit(&message).map_err(WorkflowError::Commit)?;
    println!("  [DONE] Created commit");

    // ── Step 6: Push ──
    match config.remote.as_deref() {
        Some(remote) => vcs.push_upstream(remote),
        None => vcs.push(),
    }
    .map_err(WorkflowError::Push)?;
    println!("  [DONE] Pushed");

    Ok(WorkflowOutcome::Pushed { message })
}

/// Status as it will read once everything is staged: untracked files
/// become additions.
fn as_staged(status: &str) -> String {
    status
        .lines()
        .map(|line| match line.strip_prefix("?? ") {
            Some(path) => format!("A  {path}"),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
