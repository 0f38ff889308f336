use core::fmt;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Which dimension an index or range refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
    Element,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
            Axis::Element => write!(f, "element"),
        }
    }
}

/// Errors raised by container operations and the algorithms built on them.
///
/// Every fallible call reports its own name through `op`, so a message reads
/// like `multiply: dimension mismatch (2x3 vs 2x3)`.
///
/// Singular and ill-conditioned inputs to [`invert`](crate::linalg::invert)
/// and [`pseudoinverse`](crate::linalg::pseudoinverse) are not errors: they
/// log a warning and return a NaN-filled result of the expected shape.
///
/// ```
/// use dense_linalg::{Error, Matrix};
///
/// let m = Matrix::<f64>::zeros(2, 2).unwrap();
/// assert!(matches!(m.get(2, 1), Err(Error::IndexOutOfRange { .. })));
/// assert!(matches!(m.div_scalar(0.0), Err(Error::DivideByZero { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{op}: {axis} index {index} out of range (len {len})")]
    IndexOutOfRange {
        op: &'static str,
        axis: Axis,
        index: usize,
        len: usize,
    },

    #[error("{op}: invalid {axis} range {start}..={end} (len {len})")]
    InvalidRange {
        op: &'static str,
        axis: Axis,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("{op}: operation on an empty container")]
    NullContainer { op: &'static str },

    #[error("{op}: dimension mismatch ({}x{} vs {}x{})", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("requested {requested} elements exceeds the limit of {max}")]
    Capacity { requested: usize, max: usize },

    #[error("{op}: matrix must be square, got {rows}x{cols}")]
    NonSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("{op}: division by zero")]
    DivideByZero { op: &'static str },

    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl Error {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
