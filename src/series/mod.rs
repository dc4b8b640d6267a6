mod ops;

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::index::Key;
use crate::na::NA;
use crate::scalar::Scalar;

pub use self::ops::Operand;

/// Series: a single labeled column of values addressable by key.
///
/// Keys keep their construction/insertion order for iteration and positional
/// lookup; lookups by absent key yield `NA` rather than an error.
#[derive(Debug, Clone, Default)]
pub struct Series {
    /// Keys in insertion order
    index: Vec<Key>,

    /// Cell storage; every key in `index` appears here exactly once
    values: HashMap<Key, NA<Scalar>>,
}

impl Series {
    /// Empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from values alone; keys default to `0..n-1`.
    pub fn from_values<V>(values: Vec<V>) -> Self
    where
        V: Into<NA<Scalar>>,
    {
        let mut series = Series::new();
        for (pos, value) in values.into_iter().enumerate() {
            series.set_value(pos, value);
        }
        series
    }

    /// Build a series from parallel value and key lists.
    ///
    /// Fails when the lists disagree in length or a key repeats; the series
    /// is validated before any state is built.
    pub fn with_index<V, K>(values: Vec<V>, keys: Vec<K>) -> Result<Self>
    where
        V: Into<NA<Scalar>>,
        K: Into<Key>,
    {
        if values.len() != keys.len() {
            return Err(Error::LengthMismatch {
                values: values.len(),
                keys: keys.len(),
            });
        }

        let keys: Vec<Key> = keys.into_iter().map(Into::into).collect();
        if let Some(dup) = first_duplicate(&keys) {
            return Err(Error::DuplicateIndexKey(dup.to_string()));
        }

        let mut map = HashMap::with_capacity(keys.len());
        for (key, value) in keys.iter().cloned().zip(values) {
            map.insert(key, value.into());
        }

        Ok(Series { index: keys, values: map })
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the series is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All keys in insertion order
    pub fn index(&self) -> &[Key] {
        &self.index
    }

    /// Key at a position
    pub fn index_at(&self, pos: usize) -> Option<&Key> {
        self.index.get(pos)
    }

    /// Cell at a key; `NA` when the key is absent.
    pub fn value(&self, key: impl Into<Key>) -> NA<Scalar> {
        self.values.get(&key.into()).cloned().unwrap_or(NA::NA)
    }

    /// All cells in key order
    pub fn values(&self) -> Vec<NA<Scalar>> {
        self.index
            .iter()
            .map(|key| self.values.get(key).cloned().unwrap_or(NA::NA))
            .collect()
    }

    /// Upsert a cell. A new key is appended to the end of the key order.
    pub fn set_value(&mut self, key: impl Into<Key>, value: impl Into<NA<Scalar>>) {
        let key = key.into();
        if self.values.insert(key.clone(), value.into()).is_none() {
            self.index.push(key);
        }
    }

    /// Replace all keys positionally: the cell at position `i` becomes keyed
    /// by `keys[i]`.
    ///
    /// A key list whose length differs from the series, or that repeats a
    /// key, is rejected without touching the series.
    pub fn set_index<K>(&mut self, keys: Vec<K>) -> Result<()>
    where
        K: Into<Key>,
    {
        if keys.len() != self.index.len() {
            return Err(Error::LengthMismatch {
                values: self.index.len(),
                keys: keys.len(),
            });
        }

        let keys: Vec<Key> = keys.into_iter().map(Into::into).collect();
        if let Some(dup) = first_duplicate(&keys) {
            return Err(Error::DuplicateIndexKey(dup.to_string()));
        }

        let mut map = HashMap::with_capacity(keys.len());
        for (new_key, old_key) in keys.iter().zip(&self.index) {
            if let Some(value) = self.values.get(old_key) {
                map.insert(new_key.clone(), value.clone());
            }
        }
        self.index = keys;
        self.values = map;
        Ok(())
    }
}

// Raw value vectors convert directly into default-keyed series, so frame
// constructors accept plain column data and prebuilt series alike.
impl<V> From<Vec<V>> for Series
where
    V: Into<NA<Scalar>>,
{
    fn from(values: Vec<V>) -> Self {
        Series::from_values(values)
    }
}

fn first_duplicate(keys: &[Key]) -> Option<&Key> {
    let mut seen = HashSet::with_capacity(keys.len());
    keys.iter().find(|key| !seen.insert(*key))
}
