//! Service-site sheet → list of site profiles.

use serde::Serialize;

use crate::text::{clean_phone, slugify};
use crate::types::{Dataset, Record};

const NAME: &[&str] = &["Site Name", "Service Site Name", "Name", "name"];
const ADDRESS: &[&str] = &["Site Address", "Address", "address"];
const TASKS: &[&str] = &["Tasks That Will Be Performed", "Tasks", "Task(s)"];
const DESCRIPTION: &[&str] = &[
    "Task Performed Text Entry",
    "Work Description",
    "Public Description",
    "Description",
];
const BIO: &[&str] = &["Bio", "Organization Bio", "About the Organization", "About"];
const VOLUNTEERS: &[&str] = &[
    "Volunteer Count",
    "Volunteers",
    "Volunteers Needed",
    "# Volunteers",
];
const NOTES: &[&str] = &["Special Notes", "Notes", "notes", "Additional Notes"];
const CONTACT_NAME: &[&str] = &["Contact Name", "contact name", "Contact"];
const EMAIL: &[&str] = &["Email", "email", "Contact Email"];
const PHONE: &[&str] = &["Phone Number", "Phone", "phone", "Contact Phone"];

/// One service site. Field order here is the order written to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub site_id: String,
    pub name: String,
    pub address: String,
    /// Comma-separated task labels, passed through as-is.
    pub tasks: String,
    pub volunteers: i64,
    pub notes: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub public_description: String,
    pub bio: String,
}

/// Build sites from every record that has a name. Ids are `NNN-<slug>` with
/// `NNN` the 1-based position among kept sites.
pub fn build_sites(dataset: &Dataset) -> Vec<Site> {
    let mut sites: Vec<Site> = Vec::new();
    for record in dataset {
        let name = record.lookup(NAME);
        if name.is_empty() {
            continue;
        }
        let site_id = format!("{:03}-{}", sites.len() + 1, slugify(name));
        sites.push(site_from_record(record, site_id, name));
    }
    sites
}

fn site_from_record(record: &Record, site_id: String, name: &str) -> Site {
    Site {
        site_id,
        name: name.to_owned(),
        address: record.lookup(ADDRESS).to_owned(),
        tasks: record.lookup(TASKS).to_owned(),
        volunteers: parse_volunteers(record.lookup(VOLUNTEERS)),
        notes: record.lookup(NOTES).to_owned(),
        contact_name: record.lookup(CONTACT_NAME).to_owned(),
        email: record.lookup(EMAIL).to_owned(),
        phone: clean_phone(record.lookup(PHONE)).to_owned(),
        public_description: record.lookup(DESCRIPTION).to_owned(),
        bio: record.lookup(BIO).to_owned(),
    }
}

/// Spreadsheet counts often arrive as `"12.0"`. Truncates toward zero; empty
/// or unparsable input counts as 0.
pub fn parse_volunteers(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v.trunc() as i64,
        _ => 0,
    }
}
