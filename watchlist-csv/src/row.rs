use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// One parsed CSV record.
///
/// Fields are keyed by their zero-based column index. Indices produced by the
/// parser are contiguous and start at 0. Every value is kept as text; the
/// parser never coerces numeric-looking fields.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<usize, String>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(&column).map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.0.iter().map(|(col, value)| (*col, value.as_str()))
    }

    /// Field values in column order.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.values().map(String::as_str)
    }

    pub fn into_fields(self) -> Vec<String> {
        self.0.into_values().collect()
    }

    pub fn into_inner(self) -> BTreeMap<usize, String> {
        self.0
    }

    pub(crate) fn insert(&mut self, column: usize, value: String) {
        self.0.insert(column, value);
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, column: usize) -> &str {
        match self.get(column) {
            Some(value) => value,
            None => panic!(
                "column {column} out of range for row with {} fields",
                self.len()
            ),
        }
    }
}

impl From<BTreeMap<usize, String>> for Row {
    fn from(map: BTreeMap<usize, String>) -> Self {
        Self(map)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    /// Builds a row with contiguous columns from the values in order.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).enumerate().collect())
    }
}

impl IntoIterator for Row {
    type Item = (usize, String);
    type IntoIter = btree_map::IntoIter<usize, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
