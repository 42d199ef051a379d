//! Legacy delegation for the deprecated `update-data` entry point.
//!
//! Older schedulers still call `update-data`, which used to hand off to the
//! Python sheet sync. It still does exactly that: spawn the script with the
//! caller's stdin/stdout/stderr and turn a failed child into a failed run.

use std::process::{Command, Stdio};

use crate::error::SyncError;

pub const LEGACY_PROGRAM: &str = "python3";
pub const LEGACY_ARGS: &[&str] = &["scripts/sync_sheets.py"];

/// What to run instead of `update-data`.
pub const REPLACEMENT: &str = "orgsync sync";

/// Run the legacy script from the current directory.
pub fn run_legacy_script() -> Result<(), SyncError> {
    delegate(LEGACY_PROGRAM, LEGACY_ARGS)
}

/// Spawn `program args…` with inherited stdio and wait for it.
pub fn delegate(program: &str, args: &[&str]) -> Result<(), SyncError> {
    let command_line = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    tracing::info!("delegating to `{command_line}`");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| SyncError::Spawn {
            program: command_line.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(SyncError::Delegate {
            program: command_line,
            status,
        })
    }
}
