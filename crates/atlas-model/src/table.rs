//! Year-aligned tables consumed by charts and the correlation engine.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// One row of an [`AlignedTable`]: a year plus one slot per table column.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    pub year: i32,
    values: Vec<Option<f64>>,
}

impl AlignedRow {
    /// Values in table column order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// Rows keyed by year, each carrying a value slot for every column.
///
/// Every row has exactly `columns().len()` slots; a missing value is an
/// explicit `None`, never an absent column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedTable {
    columns: Vec<String>,
    rows: Vec<AlignedRow>,
}

impl AlignedTable {
    /// Creates an empty table with the given columns. Duplicate names are
    /// collapsed onto their first position.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if !unique.contains(&column) {
                unique.push(column);
            }
        }
        Self {
            columns: unique,
            rows: Vec::new(),
        }
    }

    /// Appends a row; `values` is given in column order and padded or
    /// truncated to the column count.
    pub fn push_row(&mut self, year: i32, mut values: Vec<Option<f64>>) {
        values.resize(self.columns.len(), None);
        self.rows.push(AlignedRow { year, values });
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == key)
    }

    /// Value of column `key` in row `row`; `None` when either is absent or the slot is empty.
    pub fn value(&self, row: usize, key: &str) -> Option<f64> {
        let idx = self.column_index(key)?;
        self.rows.get(row)?.values[idx]
    }

    /// All slots of one column, in row order.
    pub fn column(&self, key: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.column_index(key)?;
        Some(self.rows.iter().map(|row| row.values[idx]).collect())
    }

    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|row| row.year).collect()
    }

    /// `[min, max]` of the row years, `[0, 0]` for an empty table.
    pub fn year_domain(&self) -> (i32, i32) {
        let min = self.rows.iter().map(|row| row.year).min();
        let max = self.rows.iter().map(|row| row.year).max();
        match (min, max) {
            (Some(min), Some(max)) => (min, max),
            _ => (0, 0),
        }
    }

    /// Returns a copy with every present value passed through `f(column, value)`.
    #[must_use]
    pub fn map_values<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str, f64) -> Option<f64>,
    {
        let rows = self
            .rows
            .iter()
            .map(|row| AlignedRow {
                year: row.year,
                values: row
                    .values
                    .iter()
                    .zip(&self.columns)
                    .map(|(value, column)| value.and_then(|v| f(column, v)))
                    .collect(),
            })
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Returns a copy restricted to `keys`, in that order. Keys that are not
    /// columns of this table become all-`None` columns.
    #[must_use]
    pub fn project(&self, keys: &[&str]) -> Self {
        let indices: Vec<Option<usize>> = keys.iter().map(|key| self.column_index(key)).collect();
        let mut projected = AlignedTable::new(keys.iter().copied());
        for row in &self.rows {
            let values = indices
                .iter()
                .map(|idx| idx.and_then(|idx| row.values[idx]))
                .collect();
            projected.push_row(row.year, values);
        }
        projected
    }
}

/// Serializes as chart rows: `[{"year": 2001, "<column>": value|null, ...}, ...]`.
impl Serialize for AlignedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowView {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

struct RowView<'a> {
    columns: &'a [String],
    row: &'a AlignedRow,
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        map.serialize_entry("year", &self.row.year)?;
        for (column, value) in self.columns.iter().zip(&self.row.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
