//! Command-line interface for repo2scroll

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod bundle;

const EXAMPLES: &str = "\
Examples:
  # Turn the current directory into a scroll named 'combined_output.txt'
  repo2scroll .

  # Specify a project and an output file
  repo2scroll ./my-project -o project_snapshot.txt

  # Exclude all .log and .tmp files
  repo2scroll . --exclude '*.log' '*.tmp'

  # Use a custom ignore file and disable .gitignore
  repo2scroll . --ignore-file .dockerignore --no-gitignore

  # Get verbose output for debugging
  repo2scroll . -v";

/// Transforms a project repository into a single, scroll-like text file, respecting ignore rules.
#[derive(Parser)]
#[command(name = "repo2scroll")]
#[command(author, version, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    #[command(flatten)]
    bundle: bundle::BundleArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment is read first; the flag decides the floor.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .with(filter)
        .try_init();

    bundle::run(cli.bundle)
}
