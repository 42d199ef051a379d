//! # orgsync-sync
//!
//! Fetch a sheet's CSV export, shape it, and write the JSON output file.
//!
//! Call [`pipeline::run`] with a [`SourceConfig`] resolved once at the binary
//! boundary; everything below it takes its inputs as arguments.

pub mod config;
pub mod delegate;
pub mod diff;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod writer;

pub use config::{FileConfig, SourceConfig};
pub use diff::{diff_output, OutputDiff};
pub use error::SyncError;
pub use pipeline::{SyncOptions, SyncReport};
pub use writer::WriteResult;
