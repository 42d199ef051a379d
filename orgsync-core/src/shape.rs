//! Output shapes: what the parsed [`Dataset`] is turned into before writing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assignments::{build_assignments, Assignments};
use crate::error::CoreError;
use crate::signups::{build_signups, Signups};
use crate::sites::{build_sites, Site};
use crate::types::Dataset;

/// Which document to produce from a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Every non-blank row as a flat object, header order preserved.
    #[default]
    Records,
    /// Volunteer site assignments keyed by normalized name.
    Assignments,
    /// Form sign-ups keyed by normalized name.
    Signups,
    /// Service-site profiles with generated ids.
    Sites,
}

impl Shape {
    pub fn all() -> &'static [Shape] {
        &[Shape::Records, Shape::Assignments, Shape::Signups, Shape::Sites]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Records => "records",
            Shape::Assignments => "assignments",
            Shape::Signups => "signups",
            Shape::Sites => "sites",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::all()
            .iter()
            .copied()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownShape { name: s.to_owned() })
    }
}

/// A shaped document, ready for `serde_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Shaped {
    Records(Dataset),
    Assignments(Assignments),
    Signups(Signups),
    Sites(Vec<Site>),
}

impl Shaped {
    /// Number of top-level entries in the written document.
    pub fn len(&self) -> usize {
        match self {
            Shaped::Records(d) => d.len(),
            Shaped::Assignments(a) => a.len(),
            Shaped::Signups(s) => s.len(),
            Shaped::Sites(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plural noun for the entries, used in status lines.
    pub fn noun(&self) -> &'static str {
        match self {
            Shaped::Records(_) => "records",
            Shaped::Assignments(_) => "assignments",
            Shaped::Signups(_) => "signups",
            Shaped::Sites(_) => "sites",
        }
    }
}

/// Turn a dataset into the requested shape.
pub fn apply(shape: Shape, dataset: Dataset) -> Shaped {
    match shape {
        Shape::Records => Shaped::Records(dataset),
        Shape::Assignments => Shaped::Assignments(build_assignments(&dataset)),
        Shape::Signups => Shaped::Signups(build_signups(&dataset)),
        Shape::Sites => Shaped::Sites(build_sites(&dataset)),
    }
}
