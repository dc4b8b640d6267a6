use std::cmp::Ordering;

use crate::na::NA;
use crate::scalar::Scalar;
use crate::series::Series;

/// Right-hand side of an elementwise operation: a single value applied to
/// every cell, or another series matched up by key.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Scalar operand
    Value(Scalar),
    /// Series operand
    Series(Series),
}

impl From<Scalar> for Operand {
    fn from(v: Scalar) -> Self {
        Operand::Value(v)
    }
}

impl From<Series> for Operand {
    fn from(v: Series) -> Self {
        Operand::Series(v)
    }
}

impl From<&Series> for Operand {
    fn from(v: &Series) -> Self {
        Operand::Series(v.clone())
    }
}

macro_rules! impl_operand_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Value(Scalar::from(v))
                }
            }
        )*
    };
}

impl_operand_from!(f64, i64, i32, bool, &str, String);

impl Series {
    /// Elementwise combinator underlying every binary operator.
    ///
    /// The result starts as a clone of `self`. A series operand drives the
    /// iteration by its own key set: each of its keys is combined against
    /// this series (missing side resolves to `NA`) and upserted into the
    /// result, so keys present only in `self` keep their original values and
    /// keys present only in the operand enter the result. A scalar operand
    /// iterates this series' own keys instead.
    pub fn combine<O, F>(&self, operand: O, op: F) -> Series
    where
        O: Into<Operand>,
        F: Fn(&NA<Scalar>, &NA<Scalar>) -> NA<Scalar>,
    {
        let mut output = self.clone();
        match operand.into() {
            Operand::Series(other) => {
                for key in other.index() {
                    let result = op(&self.value(key), &other.value(key));
                    output.set_value(key, result);
                }
            }
            Operand::Value(scalar) => {
                let rhs = NA::Value(scalar);
                for key in self.index() {
                    let result = op(&self.value(key), &rhs);
                    output.set_value(key, result);
                }
            }
        }
        output
    }

    /// Elementwise addition
    pub fn add<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| arith(a, b, |x, y| Some(x + y)))
    }

    /// Elementwise subtraction
    pub fn sub<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| arith(a, b, |x, y| Some(x - y)))
    }

    /// Elementwise multiplication
    pub fn mul<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| arith(a, b, |x, y| Some(x * y)))
    }

    /// Elementwise division. A zero divisor yields `NA`, never infinity.
    pub fn div<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| {
            arith(a, b, |x, y| if y == 0.0 { None } else { Some(x / y) })
        })
    }

    /// Elementwise equality. Present values of different variants compare
    /// unequal; a missing operand yields `NA`.
    pub fn eq<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| match (a.value(), b.value()) {
            (Some(x), Some(y)) => NA::Value(Scalar::Bool(x == y)),
            _ => NA::NA,
        })
    }

    /// Elementwise less-than
    pub fn lt<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| compare(a, b, Ordering::is_lt))
    }

    /// Elementwise less-than-or-equal
    pub fn lte<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| compare(a, b, Ordering::is_le))
    }

    /// Elementwise greater-than
    pub fn gt<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| compare(a, b, Ordering::is_gt))
    }

    /// Elementwise greater-than-or-equal
    pub fn gte<O: Into<Operand>>(&self, operand: O) -> Series {
        self.combine(operand, |a, b| compare(a, b, Ordering::is_ge))
    }
}

// Numeric combination: defined for Number ∘ Number, NA otherwise. The
// function itself may refuse a pair (division by zero).
fn arith<F>(a: &NA<Scalar>, b: &NA<Scalar>, f: F) -> NA<Scalar>
where
    F: Fn(f64, f64) -> Option<f64>,
{
    match (
        a.value().and_then(Scalar::as_f64),
        b.value().and_then(Scalar::as_f64),
    ) {
        (Some(x), Some(y)) => f(x, y).map(Scalar::Number).into(),
        _ => NA::NA,
    }
}

// Ordering comparison: defined within a variant, NA across variants or when
// either side is missing.
fn compare<F>(a: &NA<Scalar>, b: &NA<Scalar>, f: F) -> NA<Scalar>
where
    F: Fn(Ordering) -> bool,
{
    match (a.value(), b.value()) {
        (Some(x), Some(y)) => match x.partial_cmp(y) {
            Some(ord) => NA::Value(Scalar::Bool(f(ord))),
            None => NA::NA,
        },
        _ => NA::NA,
    }
}
