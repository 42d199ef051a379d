//! Naive CSV parser.
//!
//! Splits on line breaks and commas, nothing more. There is no quoting or
//! escaping: a comma inside a cell is a field separator, and a quoted cell
//! keeps its quotes. Sheet exports that need real CSV are out of scope.
//!
//! 1. Trim the whole text (BOM included).
//! 2. Split lines on `\n` / `\r\n`.
//! 3. First line → trimmed header names.
//! 4. Every other line → trimmed tokens paired with headers by position;
//!    missing tokens become `""`, extra tokens are dropped.
//! 5. Blank records are filtered by [`Dataset::from_records`].

use crate::text::trim;
use crate::types::{Dataset, Record};

/// Parse CSV text into a [`Dataset`].
///
/// Empty (or whitespace-only) input yields an empty dataset with no headers.
pub fn parse(text: &str) -> Dataset {
    let text = trim(text);
    if text.is_empty() {
        return Dataset::default();
    }

    let mut lines = text.lines();
    let headers = match lines.next() {
        Some(line) => split_fields(line).map(str::to_owned).collect::<Vec<_>>(),
        None => return Dataset::default(),
    };

    let records = lines.map(|line| record_from_line(&headers, line));
    let dataset = Dataset::from_records(headers.clone(), records);
    tracing::debug!(
        "parsed {} record(s) with {} header(s)",
        dataset.len(),
        headers.len()
    );
    dataset
}

/// Split one line on commas and trim each token.
pub fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(trim)
}

fn record_from_line(headers: &[String], line: &str) -> Record {
    let values = split_fields(line).collect::<Vec<_>>();
    let mut record = Record::new();
    for (i, header) in headers.iter().enumerate() {
        record.insert(header.as_str(), values.get(i).copied().unwrap_or(""));
    }
    record
}
