use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, error};

use envsub::env::ProcessEnv;
use envsub::interpolate::{self, Outcome};

/// Substitute prefixed environment variables into {{ }} placeholders
#[derive(Parser)]
#[command(name = "envsub")]
#[command(about = "Substitute environment values into {{ }} placeholders in files", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolate variables in file
    ///
    /// Replaces every {{ NAME }} placeholder in FILE with the value of the
    /// environment variable <prefix>_NAME, falling back to
    /// <alternative-prefix>_NAME, and rewrites the file in place.
    Interpolate {
        /// File to interpolate in place
        file: PathBuf,

        /// Primary prefix to add when looking up environment variables
        #[arg(short = 'p', long, default_value = "")]
        prefix: String,

        /// Prefix to use when the primary-prefixed variable is not set
        #[arg(short = 'a', long, default_value = "")]
        alternative_prefix: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Interpolate {
            file,
            prefix,
            alternative_prefix,
        } => run_interpolate(&file, &prefix, &alternative_prefix),
    };

    if let Err(e) = result {
        error!("fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_interpolate(path: &Path, prefix: &str, alternative_prefix: &str) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("file {} does not exist", path.display());
    }

    let env = ProcessEnv::new();

    match interpolate::run_file(path, &env, prefix, alternative_prefix)? {
        Outcome::NoMarkers => {
            debug!(file = %path.display(), "no markers found, file left untouched");
        }
        Outcome::Interpolated(_) => {
            debug!(file = %path.display(), "file interpolated in place");
        }
    }

    Ok(())
}
