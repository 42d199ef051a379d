//! `update-data` — deprecated; use `orgsync sync`.
//!
//! Kept so existing cron entries and CI jobs keep working. Runs
//! `python3 scripts/sync_sheets.py` with inherited stdio and exits 1 if it
//! fails. Takes no flags and reads no environment of its own.

use std::process::ExitCode;

use orgsync_sync::delegate::{run_legacy_script, REPLACEMENT};

fn main() -> ExitCode {
    orgsync_sync::logging::init_tracing();
    eprintln!("warning: `update-data` is deprecated; run `{REPLACEMENT}` instead");

    match run_legacy_script() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
