//! Subcommands and the arguments they share.

pub mod diff;
pub mod sync;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use orgsync_core::Shape;
use orgsync_sync::{FileConfig, SourceConfig, SyncOptions};

/// Where to read from and what to write, shared by `sync` and `diff`.
#[derive(Args, Debug)]
pub struct JobArgs {
    /// Output file [default: data/orgs.json].
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output shape: records | assignments | signups | sites [default: records].
    #[arg(long, short = 's', value_name = "SHAPE")]
    pub shape: Option<Shape>,

    /// Give up on the fetch after this many seconds (no limit by default).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// YAML file with source_url / sheet_id / gid / output / shape / timeout_secs.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl JobArgs {
    /// Read the config file and the environment once; flags win over the file.
    pub fn resolve(&self, dry_run: bool) -> Result<(SourceConfig, SyncOptions)> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => FileConfig::default(),
        };

        let source = SourceConfig::from_env(&file)?;

        let mut options = SyncOptions::from_file(&file);
        if let Some(output) = &self.output {
            options.output = output.clone();
        }
        if let Some(shape) = self.shape {
            options.shape = shape;
        }
        if let Some(secs) = self.timeout {
            options.timeout = Some(Duration::from_secs(secs));
        }
        options.dry_run = dry_run;

        tracing::debug!(
            "source {} → {} ({} shape)",
            source.url,
            options.output.display(),
            options.shape
        );
        Ok((source, options))
    }
}
