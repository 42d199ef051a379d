//! orgsync core library — records, the naive CSV parser, and output shapes.
//!
//! Public API surface:
//! - [`types`] — [`Record`], [`Dataset`], [`OrderedMap`]
//! - [`parse`] — text → [`Dataset`]
//! - [`shape`] — [`Dataset`] → the JSON document that gets written
//! - [`error`] — [`CoreError`]

pub mod assignments;
pub mod error;
pub mod keyed;
pub mod parse;
pub mod shape;
pub mod signups;
pub mod sites;
pub mod text;
pub mod types;

pub use assignments::{Assignment, AssignmentEntry, Assignments};
pub use error::CoreError;
pub use keyed::{ByName, Entry};
pub use parse::parse;
pub use shape::{Shape, Shaped};
pub use signups::{Signup, SignupEntry, Signups};
pub use sites::Site;
pub use types::{Dataset, OrderedMap, Record};
