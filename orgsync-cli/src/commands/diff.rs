//! `orgsync diff` — show what `sync` would change in the output file.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use orgsync_sync::diff_output;

use super::JobArgs;

/// Arguments for `orgsync diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub job: JobArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let (source, options) = self.job.resolve(true)?;
        let result = diff_output(&source, &options)
            .with_context(|| format!("diff failed for '{}'", options.output.display()))?;

        let Some(unified) = result.unified_diff else {
            println!("No differences for {}.", result.path.display());
            return Ok(());
        };

        for line in unified.lines() {
            println!("{}", colorize(line));
        }
        Ok(())
    }
}

fn colorize(line: &str) -> String {
    if line.starts_with("+++") || line.starts_with("---") {
        line.bold().to_string()
    } else if line.starts_with('+') {
        line.green().to_string()
    } else if line.starts_with('-') {
        line.red().to_string()
    } else if line.starts_with("@@") {
        line.cyan().to_string()
    } else {
        line.to_string()
    }
}
