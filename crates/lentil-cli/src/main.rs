//! # lentil-cli
//!
//! Command line tool for inspecting Lentil parameter files.
//!
//! This is the main entry point for the `lentil` binary. It handles command
//! parsing, sets up logging, and dispatches to the command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tracing::info;

mod commands;
mod output;

use commands::CommandContext;

/// Inspect line-oriented parameter files used by batch pipelines
#[derive(Parser)]
#[command(name = "lentil", version, about = "Parameter file inspection")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a parameter file and print the mapping
    Show {
        /// Parameter file to read
        file: Utf8PathBuf,
        /// Text separating key from value on each line
        #[arg(long, default_value = ": ")]
        separator: String,
        /// Re-type a key, given as KEY=TAG (tags: list, boolean, float, int)
        #[arg(long = "coerce", value_name = "KEY=TAG")]
        coerce: Vec<String>,
        /// Print the mapping as JSON
        #[arg(long)]
        json: bool,
        /// Write the rendering to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<Utf8PathBuf>,
    },
    /// Parse a parameter file and verify required keys are present
    Check {
        /// Parameter file to read
        file: Utf8PathBuf,
        /// Text separating key from value on each line
        #[arg(long, default_value = ": ")]
        separator: String,
        /// Re-type a key, given as KEY=TAG (tags: list, boolean, float, int)
        #[arg(long = "coerce", value_name = "KEY=TAG")]
        coerce: Vec<String>,
        /// Key that must be present in the file
        #[arg(long = "require", value_name = "KEY")]
        require: Vec<String>,
    },
    /// Print a file as a plain manifest, one trimmed entry per line
    Lines {
        /// Manifest file to read
        file: Utf8PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    info!("Starting Lentil CLI v{}", env!("CARGO_PKG_VERSION"));

    let ctx = CommandContext::new();
    if let Err(error) = commands::dispatch_command(cli.command, &ctx) {
        ctx.output.error(&error.to_string());
        if let Some(hint) = error.suggestion() {
            ctx.output.info(hint);
        }
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "lentil={},lentil_params={},lentil_core={}",
            level, level, level
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
