//! GitHub hosting through the `gh` CLI.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::HostingError;

/// Parameters for `gh repo create --public`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRepository {
    pub name: String,
    /// Local working tree pushed as the initial content.
    pub source: PathBuf,
    /// Name under which the new repository is registered as a remote.
    pub remote: String,
}

impl CreateRepository {
    /// Public repository pushed from `source` and registered as `origin`.
    pub fn public(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            remote: "origin".to_string(),
        }
    }

    /// Arguments passed to `gh`.
    pub fn args(&self) -> Vec<String> {
        vec![
            "repo".to_string(),
            "create".to_string(),
            self.name.clone(),
            "--public".to_string(),
            format!("--source={}", self.source.display()),
            format!("--remote={}", self.remote),
            "--push".to_string(),
        ]
    }
}

/// Operations bootstrap needs from the hosting provider.
#[cfg_attr(test, mockall::automock)]
pub trait HostingClient {
    /// Whether the CLI is on PATH and answers `--version`.
    fn is_installed(&self) -> bool;

    /// Whether the CLI has an authenticated session.
    fn is_authenticated(&self) -> bool;

    /// Create the repository; returns the provider's output (usually its URL).
    fn create_repository(&self, request: &CreateRepository) -> Result<String, HostingError>;
}

/// [`HostingClient`] backed by the `gh` binary.
pub struct GhCli {
    program: PathBuf,
}

impl GhCli {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("gh"),
        }
    }

    /// Use a specific `gh` executable instead of the one on PATH.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program(&self) -> &Path {
        &self.program
    }

    /// Run gh and return its stdout.
    fn run_gh(&self, args: &[String], operation: &str) -> Result<String, HostingError> {
        debug!("Running gh {}", args.join(" "));

        let output = Command::new(self.program())
            .args(args)
            .output()
            .map_err(|source| HostingError::SpawnFailed {
                operation: operation.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HostingError::CommandFailed {
                operation: operation.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run gh quietly and report only whether it succeeded.
    fn probe(&self, args: &[&str]) -> bool {
        match Command::new(self.program()).args(args).output() {
            Ok(output) => output.status.success(),
            Err(e) => {
                debug!("gh {} could not run: {}", args.join(" "), e);
                false
            }
        }
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl HostingClient for GhCli {
    fn is_installed(&self) -> bool {
        if which::which(self.program()).is_err() {
            return false;
        }
        self.probe(&["--version"])
    }

    fn is_authenticated(&self) -> bool {
        self.probe(&["auth", "status"])
    }

    fn create_repository(&self, request: &CreateRepository) -> Result<String, HostingError> {
        self.run_gh(&request.args(), "repo create")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_repository_args() {
        let request = CreateRepository::public("my-app", "/work/my-app");
        assert_eq!(
            request.args(),
            vec![
                "repo",
                "create",
                "my-app",
                "--public",
                "--source=/work/my-app",
                "--remote=origin",
                "--push",
            ]
        );
    }

    #[test]
    fn test_missing_program_is_not_installed() {
        let gh = GhCli::with_program("/definitely/not/a/real/gh-binary");
        assert!(!gh.is_installed());
        assert!(!gh.is_authenticated());
    }
}
