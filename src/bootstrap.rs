//! Repository bootstrap: create a public GitHub repository for the project.
//!
//! Missing or unauthenticated `gh` is fatal. Repository creation itself is
//! best effort: failures are reported with a checklist, not propagated.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{BootstrapError, HostingError};
use crate::git::VersionControlClient;
use crate::github::{CreateRepository, HostingClient};
use crate::manifest::project_name;

/// Configuration for the bootstrap command, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub root: PathBuf,
    /// Overrides the manifest/directory name.
    pub name: Option<String>,
}

/// How a bootstrap run ended. Both variants exit 0.
#[derive(Debug)]
pub enum BootstrapOutcome {
    Created { name: String, output: String },
    CreateFailed { name: String, error: HostingError },
}

/// Troubleshooting steps printed when repository creation fails.
pub const TROUBLESHOOTING: &[&str] = &[
    "A repository with this name may already exist on your account",
    "Check your network connection",
    "Verify your token scopes with 'gh auth status'",
    "Make sure the working tree has at least one commit to push",
    "Try manually: gh repo create <name> --public --source=. --remote=origin --push",
];

/// Run the bootstrap sequence.
pub fn run_bootstrap<H, V>(
    config: &BootstrapConfig,
    hosting: &H,
    vcs: &V,
) -> Result<BootstrapOutcome, BootstrapError>
where
    H: HostingClient + ?Sized,
    V: VersionControlClient + ?Sized,
{
    // ── Preflight ──
    if !hosting.is_installed() {
        return Err(BootstrapError::CliMissing);
    }
    println!("  [PASS] GitHub CLI installed");

    if !hosting.is_authenticated() {
        return Err(BootstrapError::NotAuthenticated);
    }
    println!("  [PASS] GitHub CLI authenticated");

    // ── Local repository ──
    if vcs.is_repository() {
        println!("  [SKIP] Git repository already initialized");
    } else {
        vcs.init().map_err(BootstrapError::InitFailed)?;
        println!("  [DONE] Initialized git repository");
    }

    // ── Remote repository ──
    let name = config
        .name
        .clone()
        .or_else(|| project_name(&config.root))
        .unwrap_or_else(|| "project".to_string());
    debug!("Using repository name {}", name);

    let request = CreateRepository::public(name.clone(), config.root.clone());
    println!("Creating public repository {}...", name);

    match hosting.create_repository(&request) {
        Ok(output) => {
            println!("  [DONE] Created {}", name);
            if !output.is_empty() {
                println!("  {}", output);
            }
            Ok(BootstrapOutcome::Created { name, output })
        }
        Err(error) => {
            warn!("Repository creation failed: {}", error);
            eprintln!("  [FAIL] {}", error);
            eprintln!();
            eprintln!("Troubleshooting:");
            for step in TROUBLESHOOTING {
                eprintln!("  - {}", step);
            }
            Ok(BootstrapOutcome::CreateFailed { name, error })
        }
    }
}
