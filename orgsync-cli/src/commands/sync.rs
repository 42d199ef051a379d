//! `orgsync sync` — fetch, shape and write the output file.

use anyhow::{Context, Result};
use clap::Args;
use orgsync_sync::{pipeline, SyncReport, WriteResult};

use super::JobArgs;

/// Arguments for `orgsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Fetch and render, but write nothing.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let (source, options) = self.job.resolve(self.dry_run)?;
        let report = pipeline::run(&source, &options)
            .with_context(|| format!("sync to '{}' failed", options.output.display()))?;
        println!("{}", status_line(&report));
        Ok(())
    }
}

fn status_line(report: &SyncReport) -> String {
    match &report.write {
        WriteResult::Written { path } => {
            format!("Wrote {} {} to {}", report.entries, report.noun, path.display())
        }
        WriteResult::WouldWrite { path } => format!(
            "[dry-run] Would write {} {} to {}",
            report.entries,
            report.noun,
            path.display()
        ),
    }
}
