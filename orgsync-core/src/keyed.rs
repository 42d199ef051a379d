//! Documents keyed by a person's normalized name.
//!
//! The same person can appear more than once (signed up twice, moved between
//! sites). Those keys hold an array of every matching row instead of a single
//! object; everyone else maps to one object.

use serde::Serialize;

use crate::text::norm;
use crate::types::OrderedMap;

pub(crate) const FIRST_NAME: &[&str] = &["First name", "First Name", "first"];
pub(crate) const LAST_NAME: &[&str] = &["Last name", "Last Name", "last"];

/// `norm(first + last)`.
pub fn name_key(first: &str, last: &str) -> String {
    norm(&format!("{first}{last}"))
}

/// One row, or every row when the key was seen more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Clone> Entry<T> {
    fn push(&mut self, item: T) {
        match self {
            Entry::One(existing) => {
                let first = existing.clone();
                *self = Entry::Many(vec![first, item]);
            }
            Entry::Many(items) => items.push(item),
        }
    }
}

/// Rows keyed by normalized name, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ByName<T>(OrderedMap<Entry<T>>);

impl<T> Default for ByName<T> {
    fn default() -> Self {
        Self(OrderedMap::new())
    }
}

impl<T> ByName<T> {
    pub fn get(&self, key: &str) -> Option<&Entry<T>> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    /// Number of unique keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys that collected more than one row.
    pub fn duplicate_keys(&self) -> usize {
        self.0
            .values()
            .filter(|e| matches!(e, Entry::Many(_)))
            .count()
    }
}

impl<T: Clone> FromIterator<(String, T)> for ByName<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut map: OrderedMap<Entry<T>> = OrderedMap::new();
        for (key, item) in iter {
            match map.get_mut(&key) {
                Some(entry) => entry.push(item),
                None => {
                    map.insert(key, Entry::One(item));
                }
            }
        }

        let grouped = ByName(map);
        let dupes = grouped.duplicate_keys();
        if dupes > 0 {
            tracing::warn!("{dupes} duplicate name key(s) stored as arrays");
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_becomes_array_in_source_order() {
        let grouped: ByName<u32> = [("a".to_string(), 1), ("b".to_string(), 2), ("a".to_string(), 3)]
            .into_iter()
            .collect();
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(grouped.get("a"), Some(&Entry::Many(vec![1, 3])));
        assert_eq!(grouped.get("b"), Some(&Entry::One(2)));
        assert_eq!(grouped.duplicate_keys(), 1);
        assert_eq!(serde_json::to_string(&grouped).unwrap(), r#"{"a":[1,3],"b":2}"#);
    }

    #[test]
    fn name_key_joins_then_normalizes() {
        assert_eq!(name_key("Mary Jane", "O'Neil"), "maryjaneoneil");
    }
}
