//! Preview support for `orgsync diff`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::{
    config::SourceConfig,
    error::io_err,
    pipeline::{fetch_and_render, SyncOptions},
    SyncError,
};

/// What `sync` would change in the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDiff {
    pub path: PathBuf,
    /// `None` when the file already holds exactly the rendered JSON.
    pub unified_diff: Option<String>,
    pub entries: usize,
}

/// Fetch and render like `sync`, then compare with the current output file.
///
/// No files are written.
pub fn diff_output(source: &SourceConfig, options: &SyncOptions) -> Result<OutputDiff, SyncError> {
    let rendered = fetch_and_render(source, options)?;
    let unified_diff = diff_against_file(&options.output, &rendered.json)?;
    Ok(OutputDiff {
        path: options.output.clone(),
        unified_diff,
        entries: rendered.entries,
    })
}

/// Unified diff from the file at `path` (empty if absent) to `rendered`.
pub fn diff_against_file(path: &Path, rendered: &str) -> Result<Option<String>, SyncError> {
    let rendered = normalize_line_endings(rendered);
    let existing = read_existing_or_empty(path)?;
    if existing == rendered {
        return Ok(None);
    }

    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();
    Ok(Some(unified))
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(normalize_line_endings(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
