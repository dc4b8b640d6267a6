use std::cmp::Ordering;
use std::collections::HashMap;

use log::{debug, trace};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::error::{Error, Result};
use crate::index::{Key, RowIndex};
use crate::na::NA;
use crate::scalar::Scalar;
use crate::series::Series;

/// Materialized row: every known column name mapped to its cell at one key.
pub type Row = HashMap<String, NA<Scalar>>;

/// Sort direction for [`DataFrame::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest values first (missing cells order before present ones)
    #[default]
    Ascending,
    /// Largest values first
    Descending,
}

/// DataFrame: a named collection of Series aligned on one shared row index.
///
/// The row index is the ascending-sorted, deduplicated union of every
/// column's key set; reading a column through the frame re-expresses it over
/// that unified index, filling gaps with `NA`. The frame exclusively owns its
/// column series and mutates them in place.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// Column storage, keyed by name
    columns: HashMap<String, Series>,

    /// Column names in insertion order
    column_order: Vec<String>,

    /// Unified row index
    row_index: RowIndex,
}

impl DataFrame {
    /// Empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from a list of columns named by position (`"0"`,
    /// `"1"`, ...).
    pub fn from_columns<C>(columns: Vec<C>) -> Self
    where
        C: Into<Series>,
    {
        let mut df = DataFrame::new();
        for (pos, column) in columns.into_iter().enumerate() {
            df.columns.insert(pos.to_string(), column.into());
            df.column_order.push(pos.to_string());
        }
        df.reindex();
        df
    }

    /// Build a frame from a list of columns paired positionally with names.
    ///
    /// The name list must match the column list in length, and names must be
    /// unique; both are validated before any column lands.
    pub fn from_named_columns<C, S>(columns: Vec<C>, names: Vec<S>) -> Result<Self>
    where
        C: Into<Series>,
        S: Into<String>,
    {
        if names.len() != columns.len() {
            return Err(Error::ColumnNameLengthMismatch {
                names: names.len(),
                columns: columns.len(),
            });
        }
        Self::from_pairs(names.into_iter().zip(columns))
    }

    /// Build a frame from `(name, column)` pairs, preserving their order.
    pub fn from_pairs<I, S, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<Series>,
    {
        let mut df = DataFrame::new();
        for (name, column) in pairs {
            let name = name.into();
            if df.columns.contains_key(&name) {
                return Err(Error::DuplicateColumnName(name));
            }
            df.columns.insert(name.clone(), column.into());
            df.column_order.push(name);
        }
        df.reindex();
        Ok(df)
    }

    /// Append a column and realign the frame.
    ///
    /// Without a name, the next unused integer-like name is assigned by
    /// probing upward from the current column count. A name already in use is
    /// rejected before the frame is touched. Returns the assigned name.
    pub fn add_column<C>(&mut self, column: C, name: Option<&str>) -> Result<String>
    where
        C: Into<Series>,
    {
        let name = match name {
            Some(given) => {
                if self.columns.contains_key(given) {
                    return Err(Error::DuplicateColumnName(given.to_string()));
                }
                given.to_string()
            }
            None => self.next_column_name(),
        };

        self.columns.insert(name.clone(), column.into());
        self.column_order.push(name.clone());
        self.reindex();
        Ok(name)
    }

    /// Cell of a column at a key; `NA` when either is absent.
    pub fn value(&self, column: &str, key: impl Into<Key>) -> NA<Scalar> {
        match self.columns.get(column) {
            Some(series) => series.value(key),
            None => NA::NA,
        }
    }

    /// Full column projected onto the frame's row index order, gaps filled
    /// with `NA`. This is the alignment contract: the projection follows the
    /// unified index, not the column's own key order.
    pub fn values(&self, column: &str) -> Vec<NA<Scalar>> {
        let series = self.columns.get(column);
        self.row_index
            .keys()
            .iter()
            .map(|key| series.map_or(NA::NA, |s| s.value(key)))
            .collect()
    }

    /// Upsert a cell, creating the column on first write. A key new to the
    /// frame is placed into the row index by sorted insertion, so the index
    /// stays ascending and deduplicated without a full resort.
    pub fn set_value(&mut self, column: &str, key: impl Into<Key>, value: impl Into<NA<Scalar>>) {
        let key = key.into();
        if !self.columns.contains_key(column) {
            self.columns.insert(column.to_string(), Series::new());
            self.column_order.push(column.to_string());
            debug!("created column \"{}\" on first write", column);
        }
        if let Some(series) = self.columns.get_mut(column) {
            series.set_value(key.clone(), value);
        }
        self.row_index.insert_sorted(key);
    }

    /// Upsert the cell at a row position. Out-of-range positions are ignored.
    pub fn set_value_at(&mut self, column: &str, pos: usize, value: impl Into<NA<Scalar>>) {
        let key = match self.row_index.get(pos) {
            Some(key) => key.clone(),
            None => {
                trace!("ignoring write to \"{}\" at out-of-range position {}", column, pos);
                return;
            }
        };
        self.set_value(column, key, value);
    }

    /// Upsert one row: one `set_value` per `(column, cell)` pair, in order.
    pub fn set_row<K, I, S, V>(&mut self, key: K, cells: I)
    where
        K: Into<Key>,
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<NA<Scalar>>,
    {
        let key = key.into();
        for (column, value) in cells {
            self.set_value(column.as_ref(), key.clone(), value);
        }
    }

    /// Materialize the row at a key: every known column mapped to its cell.
    ///
    /// Returns `None` when every column yields `NA`, which distinguishes a
    /// row that is absent from one that is present with partial data.
    pub fn row(&self, key: impl Into<Key>) -> Option<Row> {
        let cells = self.row_cells(&key.into());
        if cells.iter().all(|(_, value)| value.is_na()) {
            return None;
        }
        Some(cells.into_iter().collect())
    }

    /// Column names in insertion order
    pub fn columns(&self) -> &[String] {
        &self.column_order
    }

    /// Row keys in index order
    pub fn index(&self) -> &[Key] {
        self.row_index.keys()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.row_index.len()
    }

    /// Whether the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.row_index.is_empty()
    }

    /// Row key at a position
    pub fn index_at(&self, pos: usize) -> Option<&Key> {
        self.row_index.get(pos)
    }

    /// Position of a key in the row index, `None` when absent
    pub fn position(&self, key: impl Into<Key>) -> Option<usize> {
        self.row_index.position(&key.into())
    }

    /// Rebuild the row index from scratch: deduplicated union of every
    /// column's keys, sorted ascending. Called after every structural change.
    pub fn reindex(&mut self) {
        let column_keys: Vec<&[Key]> = self
            .column_order
            .iter()
            .filter_map(|name| self.columns.get(name))
            .map(|series| series.index())
            .collect();
        self.row_index = RowIndex::from_union(column_keys);
        debug!(
            "reindexed: {} rows across {} columns",
            self.row_index.len(),
            self.column_order.len()
        );
    }

    /// New frame holding only the rows the predicate accepts.
    ///
    /// Rows are materialized in index order and re-inserted through
    /// [`DataFrame::set_row`], so the result carries the source's full column
    /// universe in source column order.
    pub fn filter<P>(&self, predicate: P) -> DataFrame
    where
        P: Fn(&Row, &Key) -> bool,
    {
        let mut output = DataFrame::new();
        for key in self.row_index.keys() {
            let cells = self.row_cells(key);
            if cells.iter().all(|(_, value)| value.is_na()) {
                continue;
            }
            let row: Row = cells.iter().cloned().collect();
            if predicate(&row, key) {
                output.set_row(key.clone(), cells);
            }
        }
        output
    }

    /// Stable in-place reorder of the row index by one column's values.
    ///
    /// Missing cells order before present ones ascending; incomparable pairs
    /// keep their relative order. The ascending-key invariant is suspended
    /// until the next reindex.
    pub fn sort(&mut self, column: &str, direction: SortDirection) {
        let series = self.columns.get(column);
        let mut keys = self.row_index.keys().to_vec();
        keys.sort_by(|a, b| {
            let left = series.map_or(NA::NA, |s| s.value(a));
            let right = series.map_or(NA::NA, |s| s.value(b));
            let ord = left.partial_cmp(&right).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        self.row_index.reorder(keys);
    }

    /// Materialize the full table as JSON row objects in row index order,
    /// each carrying its key under the reserved `__index` field.
    pub fn to_records(&self) -> Vec<JsonValue> {
        self.row_index
            .keys()
            .iter()
            .map(|key| {
                let mut record = JsonMap::new();
                record.insert(
                    "__index".to_string(),
                    serde_json::to_value(key).unwrap_or(JsonValue::Null),
                );
                for name in &self.column_order {
                    let value = self.columns.get(name).map_or(NA::NA, |s| s.value(key));
                    record.insert(
                        name.clone(),
                        serde_json::to_value(&value).unwrap_or(JsonValue::Null),
                    );
                }
                JsonValue::Object(record)
            })
            .collect()
    }

    fn next_column_name(&self) -> String {
        let mut candidate = self.column_order.len();
        while self.columns.contains_key(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn row_cells(&self, key: &Key) -> Vec<(String, NA<Scalar>)> {
        self.column_order
            .iter()
            .map(|name| {
                let value = self.columns.get(name).map_or(NA::NA, |s| s.value(key));
                (name.clone(), value)
            })
            .collect()
    }
}
