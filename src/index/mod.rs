use std::collections::HashSet;
use std::fmt::{self, Display};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Row label of a Series or DataFrame.
///
/// Labels are one of three domains with a single total order across them:
/// integers first, then timestamps, then strings; the natural order applies
/// within each domain. Date labels are normalized to an instant, so equal
/// dates are equal keys no matter how they were produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Key {
    /// Integral label (the default `0..n-1` construction keys)
    Int(i64),
    /// Date label, compared by instant
    Timestamp(DateTime<Utc>),
    /// String label
    Str(String),
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(v) => write!(f, "{}", v),
            Key::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            Key::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Int(v)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Key::Int(v as i64)
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        Key::Int(v as i64)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Str(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Str(v)
    }
}

impl From<DateTime<Utc>> for Key {
    fn from(v: DateTime<Utc>) -> Self {
        Key::Timestamp(v)
    }
}

impl From<NaiveDate> for Key {
    fn from(v: NaiveDate) -> Self {
        Key::Timestamp(v.and_time(NaiveTime::MIN).and_utc())
    }
}

impl From<&Key> for Key {
    fn from(v: &Key) -> Self {
        v.clone()
    }
}

/// Row index of a DataFrame: the deduplicated, ascending-sorted union of
/// every column's key set, with a membership set for O(1) presence checks
/// during incremental writes.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    keys: Vec<Key>,
    members: HashSet<Key>,
}

impl RowIndex {
    /// Empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from the key sets of several columns: deduplicate,
    /// then sort ascending.
    pub fn from_union<'a, I>(columns: I) -> Self
    where
        I: IntoIterator<Item = &'a [Key]>,
    {
        let mut keys = Vec::new();
        let mut members = HashSet::new();
        for column_keys in columns {
            for key in column_keys {
                if members.insert(key.clone()) {
                    keys.push(key.clone());
                }
            }
        }
        keys.sort();
        RowIndex { keys, members }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether a key is present
    pub fn contains(&self, key: &Key) -> bool {
        self.members.contains(key)
    }

    /// Key at a position
    pub fn get(&self, pos: usize) -> Option<&Key> {
        self.keys.get(pos)
    }

    /// Position of a key, `None` when absent
    pub fn position(&self, key: &Key) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// All keys in index order
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Insert a key at its sorted position. Returns false when the key was
    /// already present.
    pub fn insert_sorted(&mut self, key: Key) -> bool {
        if !self.members.insert(key.clone()) {
            return false;
        }
        let pos = self.keys.partition_point(|k| *k < key);
        self.keys.insert(pos, key);
        true
    }

    /// Replace the key order with a permutation of the current keys.
    pub(crate) fn reorder(&mut self, keys: Vec<Key>) {
        debug_assert_eq!(keys.len(), self.keys.len());
        self.keys = keys;
    }
}
