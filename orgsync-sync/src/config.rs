//! Where the sheet comes from and where the JSON goes.
//!
//! The source is resolved once, at the binary boundary, from the process
//! environment and an optional YAML file. Nothing below this module reads the
//! environment.
//!
//! Source precedence: `SHEET_CSV_URL` > `source_url` (file) > `ORGS_SHEET_ID`
//! (env) > `sheet_id` (file). Empty values count as unset.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use orgsync_core::Shape;

use crate::error::{io_err, SyncError};

/// Required unless a sheet id is given instead.
pub const SOURCE_URL_VAR: &str = "SHEET_CSV_URL";
pub const SHEET_ID_VAR: &str = "ORGS_SHEET_ID";
pub const SHEET_GID_VAR: &str = "ORGS_SHEET_GID";

pub const DEFAULT_OUTPUT: &str = "data/orgs.json";
pub const DEFAULT_GID: &str = "0";

/// Optional `orgsync.yaml` contents. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub source_url: Option<String>,
    pub sheet_id: Option<String>,
    pub gid: Option<String>,
    pub output: Option<PathBuf>,
    pub shape: Option<Shape>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        serde_yaml::from_str(&contents).map_err(|source| SyncError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The resolved CSV source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: String,
}

impl SourceConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Resolve from the process environment, falling back to `file`.
    pub fn from_env(file: &FileConfig) -> Result<Self, SyncError> {
        Self::resolve(|key| std::env::var(key).ok(), file)
    }

    /// Resolve using `lookup` for environment values.
    pub fn resolve<F>(lookup: F, file: &FileConfig) -> Result<Self, SyncError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| non_empty(lookup(key));

        if let Some(url) = env(SOURCE_URL_VAR).or_else(|| non_empty(file.source_url.clone())) {
            return Ok(Self::new(url));
        }

        let sheet_id = env(SHEET_ID_VAR).or_else(|| non_empty(file.sheet_id.clone()));
        if let Some(sheet_id) = sheet_id {
            let gid = env(SHEET_GID_VAR)
                .or_else(|| non_empty(file.gid.clone()))
                .unwrap_or_else(|| DEFAULT_GID.to_string());
            return Ok(Self::new(sheet_export_url(&sheet_id, &gid)));
        }

        Err(SyncError::MissingSource {
            var: SOURCE_URL_VAR,
            fallback: SHEET_ID_VAR,
        })
    }
}

/// CSV export URL for a publicly readable Google Sheet tab.
pub fn sheet_export_url(sheet_id: &str, gid: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv&gid={gid}")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
