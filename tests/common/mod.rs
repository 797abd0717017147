//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};

use quickcommit::{VcsError, VersionControlClient};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository in a temp directory with a committer identity.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file relative to the repository root, creating parent dirs.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Write and commit files. Returns the commit OID.
    pub fn commit_files(&self, files: &[(&str, &str)], message: &str) -> Oid {
        let mut index = self.repo.index().expect("Failed to get index");
        for (rel, content) in files {
            self.write(rel, content);
            index.add_path(Path::new(rel)).expect("Failed to add file");
        }
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = self.signature();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Attach a fresh bare repository as `origin` and return its directory.
    pub fn add_bare_origin(&self) -> tempfile::TempDir {
        let remote_dir = tempfile::tempdir().expect("Failed to create remote dir");
        Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");
        self.repo
            .remote(
                "origin",
                remote_dir.path().to_str().expect("Invalid remote path"),
            )
            .expect("Failed to add origin remote");
        remote_dir
    }

    /// Message of the HEAD commit.
    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map(|c| c.message().unwrap_or_default().to_string())
            .expect("Failed to read HEAD commit")
    }

    /// Current branch short name.
    pub fn branch(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.shorthand().map(String::from))
            .unwrap_or_else(|| "master".to_string())
    }
}

/// In-memory [`VersionControlClient`] with canned status and diffs that
/// records every mutating call.
#[derive(Default)]
pub struct FakeVcs {
    pub repository: bool,
    pub workdir: Option<PathBuf>,
    pub status: String,
    pub diffs: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeVcs {
    pub fn with_status(status: &str) -> Self {
        Self {
            repository: true,
            status: status.to_string(),
            ..Default::default()
        }
    }

    pub fn diff_for(mut self, path: &str, diff: &str) -> Self {
        self.diffs.insert(path.to_string(), diff.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

impl VersionControlClient for FakeVcs {
    fn is_repository(&self) -> bool {
        self.repository
    }

    fn workdir(&self) -> Option<PathBuf> {
        self.workdir.clone()
    }

    fn status(&self) -> Result<String, VcsError> {
        Ok(self.status.clone())
    }

    fn diff(&self, path: &str) -> Result<String, VcsError> {
        self.diffs
            .get(path)
            .cloned()
            .ok_or_else(|| VcsError::CommandFailed {
                operation: "diff".to_string(),
                stderr: format!("no diff for {path}"),
            })
    }

    fn stage_all(&self) -> Result<(), VcsError> {
        self.record("add");
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), VcsError> {
        self.record(&format!("commit:{message}"));
        Ok(())
    }

    fn push(&self) -> Result<(), VcsError> {
        self.record("push");
        Ok(())
    }

    fn push_upstream(&self, remote: &str) -> Result<(), VcsError> {
        self.record(&format!("push:{remote}"));
        Ok(())
    }

    fn init(&self) -> Result<(), VcsError> {
        self.record("init");
        Ok(())
    }
}

/// Create an executable shell script in `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, body).expect("Failed to write script");
    let mut perms = std::fs::metadata(&path)
        .expect("Failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("Failed to chmod script");
    path
}
