//! Volunteer sign-up form export → `{ "<normalized name>": signup }`.
//!
//! Only a first and last name are required. Missing optional columns are
//! written as empty strings.

use serde::Serialize;

use crate::keyed::{name_key, ByName, Entry, FIRST_NAME, LAST_NAME};
use crate::text::clean_phone;
use crate::types::{Dataset, Record};

const EMAIL: &[&str] = &["Email", "Email Address", "email"];
const PHONE: &[&str] = &["Phone", "Phone Number", "phone"];
const PREFERRED_ORG: &[&str] = &["Preferred Organization", "Organization", "preferredOrg"];
const TIMESTAMP: &[&str] = &["Timestamp", "timestamp"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
    pub preferred_org: String,
    pub timestamp: String,
}

impl Signup {
    /// `None` when the row lacks a first or last name.
    pub fn from_record(record: &Record) -> Option<Self> {
        let first = record.lookup(FIRST_NAME);
        let last = record.lookup(LAST_NAME);
        if first.is_empty() || last.is_empty() {
            return None;
        }
        Some(Self {
            first: first.to_owned(),
            last: last.to_owned(),
            email: record.lookup(EMAIL).to_owned(),
            phone: clean_phone(record.lookup(PHONE)).to_owned(),
            preferred_org: record.lookup(PREFERRED_ORG).to_owned(),
            timestamp: record.lookup(TIMESTAMP).to_owned(),
        })
    }

    pub fn key(&self) -> String {
        name_key(&self.first, &self.last)
    }
}

pub type SignupEntry = Entry<Signup>;

/// Sign-ups keyed by normalized name, in first-seen order.
pub type Signups = ByName<Signup>;

pub fn build_signups(dataset: &Dataset) -> Signups {
    dataset
        .iter()
        .filter_map(Signup::from_record)
        .map(|item| (item.key(), item))
        .collect()
}
