//! Volunteer assignment sheet → `{ "<normalized name>": assignment }`.

use serde::Serialize;

use crate::keyed::{name_key, ByName, Entry, FIRST_NAME, LAST_NAME};
use crate::types::{Dataset, Record};

const SITE: &[&str] = &["Site", "site"];
const GROUP: &[&str] = &["Organization/RSO", "Organization", "RSO", "group"];
const CREW_LEADER: &[&str] = &["Delegate", "Crew Leader", "crew leader", "crew"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub first: String,
    pub last: String,
    pub site: String,
    pub group: String,
    pub crew_leader: String,
}

impl Assignment {
    /// `None` when the row lacks a first name, last name or site.
    pub fn from_record(record: &Record) -> Option<Self> {
        let first = record.lookup(FIRST_NAME);
        let last = record.lookup(LAST_NAME);
        let site = record.lookup(SITE);
        if first.is_empty() || last.is_empty() || site.is_empty() {
            return None;
        }
        Some(Self {
            first: first.to_owned(),
            last: last.to_owned(),
            site: site.to_owned(),
            group: record.lookup(GROUP).to_owned(),
            crew_leader: record.lookup(CREW_LEADER).to_owned(),
        })
    }

    pub fn key(&self) -> String {
        name_key(&self.first, &self.last)
    }
}

pub type AssignmentEntry = Entry<Assignment>;

/// Assignments keyed by normalized name, in first-seen order.
pub type Assignments = ByName<Assignment>;

pub fn build_assignments(dataset: &Dataset) -> Assignments {
    dataset
        .iter()
        .filter_map(Assignment::from_record)
        .map(|item| (item.key(), item))
        .collect()
}
