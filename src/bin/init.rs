//! quickcommit-init - create a public GitHub repository for the current project.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use quickcommit::bootstrap::{BootstrapConfig, BootstrapOutcome, run_bootstrap};
use quickcommit::{GhCli, GitCli};

/// Create a public GitHub repository for this project and push it.
#[derive(Parser, Debug)]
#[command(name = "quickcommit-init")]
#[command(about = "Create a public GitHub repository for this project and push it")]
#[command(version)]
struct Cli {
    /// Repository name (defaults to the package.json/Cargo.toml name, then the directory name)
    #[arg(long)]
    name: Option<String>,

    /// Project directory
    #[arg(short = 'C', long = "path", default_value = ".")]
    path: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let root = cli.path.canonicalize().unwrap_or(cli.path);
    let config = BootstrapConfig {
        root: root.clone(),
        name: cli.name,
    };

    println!("Preflight checks:");
    match run_bootstrap(&config, &GhCli::new(), &GitCli::new(root)) {
        Ok(BootstrapOutcome::Created { name, .. }) => {
            println!();
            println!("Repository {} is ready.", name);
        }
        Ok(BootstrapOutcome::CreateFailed { name, .. }) => {
            println!();
            println!("Repository {} was not created. See the checklist above.", name);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}
