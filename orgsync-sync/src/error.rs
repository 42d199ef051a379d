//! Error types for orgsync-sync.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No source URL could be resolved from the environment or config file.
    #[error("missing required configuration: set {var} (or {fallback}) to the sheet's CSV export")]
    MissingSource {
        var: &'static str,
        fallback: &'static str,
    },

    /// The config file could not be read or parsed.
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The server answered with a non-success status.
    #[error("fetch of {url} failed: HTTP {code} {reason}")]
    Status {
        url: String,
        code: u16,
        reason: String,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("fetch of {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The response body could not be read as UTF-8 text.
    #[error("reading response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The delegated program could not be started.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The delegated program ran and failed.
    #[error("`{program}` failed with {status}")]
    Delegate { program: String, status: ExitStatus },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
