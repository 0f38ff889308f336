//! Bracketed literal syntax: `"[1 2 3]"` for vectors, `"[1 2;3 4]"` for
//! matrices.
//!
//! The enclosing brackets are optional. Besides digits and whitespace only
//! `+`, `-` and `.` may appear, plus `;` between matrix rows. A literal that
//! contains no digit at all is the empty vector / null matrix.

use core::str::FromStr;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::traits::Scalar;
use crate::vector::Vector;

/// Strip enclosing brackets and validate the remaining characters.
///
/// Returns `None` when the body has no digit.
fn body<'a>(text: &'a str, allow_rows: bool) -> Result<Option<&'a str>> {
    let trimmed = text.trim();
    let inner = match trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => inner,
        None => trimmed,
    };
    if let Some(bad) = inner.chars().find(|&c| {
        !(c.is_ascii_digit()
            || c.is_whitespace()
            || matches!(c, '+' | '-' | '.')
            || (allow_rows && c == ';'))
    }) {
        return Err(Error::parse(text, format!("invalid character {bad:?}")));
    }
    if !inner.chars().any(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    Ok(Some(inner))
}

fn tokens<T: Scalar + FromStr>(text: &str, row: &str) -> Result<Vec<T>> {
    row.split_whitespace()
        .map(|tok| {
            tok.parse::<T>()
                .map_err(|_| Error::parse(text, format!("invalid number {tok:?}")))
        })
        .collect()
}

impl<T: Scalar + FromStr> Vector<T> {
    /// Parse a literal such as `"[1 2 3]"`.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let v = Vector::<f64>::parse("[1 -2.5 3]").unwrap();
    /// assert_eq!(v.as_slice(), &[1.0, -2.5, 3.0]);
    /// assert!(Vector::<f64>::parse("[1 a]").is_err());
    /// assert!(Vector::<f64>::parse("[]").unwrap().is_empty());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        match body(text, false)? {
            None => Ok(Self::empty()),
            Some(inner) => Self::from_vec(tokens(text, inner)?),
        }
    }
}

impl<T: Scalar + FromStr> Matrix<T> {
    /// Parse a literal such as `"[1 2;3 4]"`. Every row must have the same
    /// number of entries.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::<i32>::parse("[1 2 3; 4 5 6]").unwrap();
    /// assert_eq!(m.size(), (2, 3));
    /// assert_eq!(m[(1, 2)], 6);
    /// assert!(Matrix::<i32>::parse("[1 2; 3]").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let Some(inner) = body(text, true)? else {
            return Ok(Self::null());
        };
        let rows = inner
            .split(';')
            .map(|row| tokens::<T>(text, row))
            .collect::<Result<Vec<_>>>()?;
        let cols = rows[0].len();
        if let Some((i, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::parse(
                text,
                format!("row {i} has {} entries, expected {cols}", bad.len()),
            ));
        }
        Self::from_rows(&rows)
    }
}

impl<T: Scalar + FromStr> FromStr for Vector<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<T: Scalar + FromStr> FromStr for Matrix<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_with_and_without_brackets() {
        let a: Vector<f64> = "[1 2 3]".parse().unwrap();
        let b: Vector<f64> = "  1   2 3 ".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn half_bracket_is_invalid() {
        assert!(Vector::<f64>::parse("[1 2").is_err());
        assert!(Vector::<f64>::parse("1 2]").is_err());
    }

    #[test]
    fn invalid_characters() {
        let err = Matrix::<f64>::parse("[a b c; d e f]").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("invalid character 'a'"));
        assert!(Vector::<f64>::parse("[1;2]").is_err());
        assert!(Vector::<f64>::parse("[1, 2]").is_err());
    }

    #[test]
    fn no_digits_is_empty() {
        assert!(Vector::<i32>::parse("").unwrap().is_empty());
        assert!(Vector::<i32>::parse("[ - ]").unwrap().is_empty());
        assert!(Matrix::<i32>::parse("[;]").unwrap().is_null());
    }

    #[test]
    fn bad_tokens() {
        assert!(Vector::<i32>::parse("[1.5 2]").is_err());
        assert!(Vector::<f64>::parse("[1-2]").is_err());
        assert!(Vector::<f64>::parse("[1..2]").is_err());
    }

    #[test]
    fn matrix_rows() {
        let m = Matrix::<f64>::parse("[1 2;3 4]").unwrap();
        assert_eq!(m, Matrix::<f64>::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap());
        let col = Matrix::<i64>::parse("[1;2;3]").unwrap();
        assert_eq!(col.size(), (3, 1));
    }

    #[test]
    fn matrix_ragged_rows() {
        let err = Matrix::<f64>::parse("[1 2 3;4 5]").unwrap_err();
        assert!(err.to_string().contains("row 1 has 2 entries, expected 3"));
        assert!(Matrix::<f64>::parse("[1 2;]").is_err());
    }

    #[test]
    fn display_parses_back() {
        let m = Matrix::<f64>::from_rows(&[[1.5, -2.0], [0.25, 4.0]]).unwrap();
        assert_eq!(Matrix::<f64>::parse(&m.to_string()).unwrap(), m);
        let v = Vector::from_slice(&[7, -8]).unwrap();
        assert_eq!(Vector::<i32>::parse(&v.to_string()).unwrap(), v);
    }
}
