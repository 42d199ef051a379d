//! Small string helpers shared by the parser and the shapes.

/// Whitespace as spreadsheet exports see it: Unicode whitespace plus the
/// UTF-8 byte-order mark that some exports prepend.
pub fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

pub fn trim(s: &str) -> &str {
    s.trim_matches(is_trimmable)
}

/// Lower-case and keep only `[a-z0-9]`. Used to key people by name.
///
/// ```
/// assert_eq!(orgsync_core::text::norm(" Mary-Jane O'Neil "), "maryjaneoneil");
/// ```
pub fn norm(s: &str) -> String {
    trim(s)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Phone cell as text: trimmed, without the `.0` a sheet adds when it stored
/// the number as a float.
///
/// ```
/// assert_eq!(orgsync_core::text::clean_phone(" 5550100.0 "), "5550100");
/// ```
pub fn clean_phone(s: &str) -> &str {
    let s = trim(s);
    s.strip_suffix(".0").unwrap_or(s)
}

/// Lower-case, collapse every run outside `[a-z0-9]` into one `-`, and strip
/// leading/trailing dashes.
///
/// ```
/// assert_eq!(orgsync_core::text::slugify("  St. Mary's -- Food Bank "), "st-mary-s-food-bank");
/// ```
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    let mut pending_dash = false;
    for c in trim(s).to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
