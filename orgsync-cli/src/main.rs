//! orgsync — spreadsheet CSV export → JSON data file.
//!
//! # Usage
//!
//! ```text
//! SHEET_CSV_URL=<url> orgsync sync [--output <path>] [--shape records|assignments|signups|sites]
//!                                 [--timeout <secs>] [--config <file>] [--dry-run]
//! SHEET_CSV_URL=<url> orgsync diff [--output <path>] [--shape ...] [--timeout <secs>] [--config <file>]
//! ```

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "orgsync",
    version,
    about = "Sync a spreadsheet's CSV export into a JSON data file",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the sheet and write the JSON output file.
    Sync(SyncArgs),

    /// Show a unified diff of what sync would write.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    orgsync_sync::logging::init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}
