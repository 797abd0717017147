//! quickcommit - CLI entry point.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use quickcommit::GitCli;
use quickcommit::config::CommitConfig;
use quickcommit::workflow::run_commit;

/// Stage, commit and push all changes with a generated commit message.
#[derive(Parser, Debug)]
#[command(name = "quickcommit")]
#[command(about = "Stage, commit and push all changes with a generated commit message")]
#[command(version)]
struct Cli {
    /// Show the status and the generated message without staging, committing, or pushing
    #[arg(long)]
    dry_run: bool,

    /// Working tree to operate on
    #[arg(short = 'C', long = "path", default_value = ".")]
    path: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }

        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = cli
        .path
        .canonicalize()
        .with_context(|| format!("Working tree {} does not exist", cli.path.display()))?;

    let config = CommitConfig::from_env(root.clone(), cli.dry_run);
    let git = GitCli::new(root);

    run_commit(&config, &git)?;
    Ok(())
}

/// Log to stderr so progress output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}
