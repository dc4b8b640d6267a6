use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::Serialize;

use crate::na::NA;

/// Cell value of a Series.
///
/// An operand or stored cell is statically one of these variants; there is no
/// runtime type probing anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Numeric value
    Number(f64),
    /// Boolean value (comparison results)
    Bool(bool),
    /// Text value
    Text(String),
}

impl Scalar {
    /// Numeric view of the cell, `None` for non-numeric variants
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }
}

// Values of different variants never compare; callers treat that as a
// missing comparison result.
impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Number(a), Scalar::Number(b)) => a.partial_cmp(b),
            (Scalar::Bool(a), Scalar::Bool(b)) => a.partial_cmp(b),
            (Scalar::Text(a), Scalar::Text(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Number(v as f64)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Number(v as f64)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

// Direct conversions into NA-wrapped cells, so callers can pass plain values
// to setters without spelling out NA::Value(Scalar::from(..)).
macro_rules! impl_na_scalar_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NA<Scalar> {
                fn from(v: $t) -> Self {
                    NA::Value(Scalar::from(v))
                }
            }
        )*
    };
}

impl_na_scalar_from!(f64, i64, i32, bool, &str, String);
