use thiserror::Error;

/// Error type for construction and mutation contract violations.
///
/// Missing-data lookups are not errors: reading an absent key or column
/// yields `NA`. Every variant below is raised synchronously at the call that
/// detects it, before any receiver state has been touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("length mismatch: {values} values but {keys} index keys")]
    LengthMismatch { values: usize, keys: usize },

    #[error("column name list length ({names}) does not match column count ({columns})")]
    ColumnNameLengthMismatch { names: usize, columns: usize },

    #[error("duplicate column name \"{0}\"")]
    DuplicateColumnName(String),

    #[error("duplicate index key \"{0}\"")]
    DuplicateIndexKey(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
