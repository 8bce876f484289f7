//! Header-aware view over parsed rows.
//!
//! The parser never treats the first row specially. Watchlist exports carry
//! their column names there, so [`Table`] splits it off and lets callers look
//! fields up by name.

use std::collections::BTreeMap;

use crate::row::Row;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Use the first row as the header. Empty input gives an empty table.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut rows = rows.into_iter();
        let header = rows.next().map(Row::into_fields).unwrap_or_default();
        Self {
            header,
            rows: rows.collect(),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, header excluded.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column of the first header cell named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|cell| cell == name)
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(|row| Record { table: self, row })
    }

    /// Every data row as a `header -> value` map. Cells without a header
    /// column are left out; for repeated header names the first column wins.
    pub fn to_maps(&self) -> Vec<BTreeMap<String, String>> {
        self.records()
            .map(|record| {
                let mut map = BTreeMap::new();
                for (name, value) in record.iter() {
                    map.entry(name.to_owned())
                        .or_insert_with(|| value.to_owned());
                }
                map
            })
            .collect()
    }
}

/// A data row paired with the table header.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    row: &'a Row,
}

impl<'a> Record<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.table
            .column_index(name)
            .and_then(|col| self.row.get(col))
    }

    pub fn get_index(&self, column: usize) -> Option<&'a str> {
        self.row.get(column)
    }

    /// `(header, value)` pairs for the header columns present in this row.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let row = self.row;
        self.table
            .header
            .iter()
            .enumerate()
            .filter_map(move |(col, name)| {
                row.get(col).map(|value| (name.as_str(), value))
            })
    }

    pub fn row(&self) -> &'a Row {
        self.row
    }
}
