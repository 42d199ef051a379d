//! Shared sync pipeline entrypoint used by `orgsync sync` and `orgsync diff`.
//!
//! fetch → parse → filter → shape → render → write, strictly in that order.
//! Nothing touches the output path until the render has succeeded.

use std::path::PathBuf;
use std::time::Duration;

use orgsync_core::{parse, shape, Shape};

use crate::config::{FileConfig, SourceConfig, DEFAULT_OUTPUT};
use crate::error::SyncError;
use crate::fetch::fetch_text;
use crate::writer::{write_output, WriteResult};

/// Everything about a run except where the data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub output: PathBuf,
    pub shape: Shape,
    pub timeout: Option<Duration>,
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            shape: Shape::default(),
            timeout: None,
            dry_run: false,
        }
    }
}

impl SyncOptions {
    /// Defaults overlaid with whatever the config file sets.
    pub fn from_file(file: &FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            output: file.output.clone().unwrap_or(defaults.output),
            shape: file.shape.unwrap_or(defaults.shape),
            timeout: file.timeout_secs.map(Duration::from_secs),
            dry_run: false,
        }
    }
}

/// A rendered output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub json: String,
    pub entries: usize,
    pub noun: &'static str,
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub entries: usize,
    pub noun: &'static str,
    pub write: WriteResult,
}

/// Parse, shape, and pretty-print fetched CSV text.
pub fn render(text: &str, shape: Shape) -> Result<Rendered, SyncError> {
    let dataset = parse(text);
    let shaped = shape::apply(shape, dataset);
    let json = serde_json::to_string_pretty(&shaped)?;
    Ok(Rendered {
        json,
        entries: shaped.len(),
        noun: shaped.noun(),
    })
}

/// Fetch the source and render it without writing anything.
pub fn fetch_and_render(source: &SourceConfig, options: &SyncOptions) -> Result<Rendered, SyncError> {
    let text = fetch_text(&source.url, options.timeout)?;
    render(&text, options.shape)
}

/// Run the whole sync job once.
pub fn run(source: &SourceConfig, options: &SyncOptions) -> Result<SyncReport, SyncError> {
    let rendered = fetch_and_render(source, options)?;
    let write = write_output(&options.output, &rendered.json, options.dry_run)?;
    Ok(SyncReport {
        entries: rendered.entries,
        noun: rendered.noun,
        write,
    })
}
