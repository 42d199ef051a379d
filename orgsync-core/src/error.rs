//! Error types for orgsync-core.

use thiserror::Error;

/// All errors that can arise from core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A shape name that is not one of `records`, `assignments`, `signups`, `sites`.
    #[error("unknown shape '{name}'; expected: records, assignments, signups, sites")]
    UnknownShape { name: String },
}
