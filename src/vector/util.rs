use core::cmp::Ordering;
use core::fmt;

use num_traits::{Float, Zero};

use crate::config;
use crate::error::{Error, Result};
use crate::traits::{LinalgScalar, Scalar};

use super::Vector;

// ── Growth ──────────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Append `rhs` after `self`.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let a = Vector::from_slice(&[1, 2]).unwrap();
    /// let b = Vector::from_slice(&[3]).unwrap();
    /// assert_eq!(a.concat(&b).unwrap().as_slice(), &[1, 2, 3]);
    /// ```
    pub fn concat(&self, rhs: &Self) -> Result<Self> {
        config::check_vector_len(self.len() + rhs.len())?;
        let mut data = Vec::with_capacity(self.len() + rhs.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&rhs.data);
        Ok(Self::from_raw(data))
    }

    /// Append one element.
    pub fn push(&mut self, value: T) -> Result<()> {
        config::check_vector_len(self.len() + 1)?;
        self.data.push(value);
        Ok(())
    }

    /// Insert one element at the front.
    pub fn prepend(&mut self, value: T) -> Result<()> {
        config::check_vector_len(self.len() + 1)?;
        self.data.insert(0, value);
        Ok(())
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Sum of all elements (zero for an empty vector).
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Running sum: element `i` holds `Σ_{k≤i} v[k]`.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let v = Vector::from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(v.cumsum().as_slice(), &[1, 3, 6, 10]);
    /// ```
    pub fn cumsum(&self) -> Self {
        let mut acc = T::zero();
        let data = self
            .data
            .iter()
            .map(|&x| {
                acc = acc + x;
                acc
            })
            .collect();
        Self::from_raw(data)
    }

    /// Arithmetic mean. Integer vectors use integer division.
    pub fn mean(&self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::NullContainer { op: "mean" });
        }
        let count = self.data.iter().fold(T::zero(), |n, _| n + T::one());
        Ok(self.sum() / count)
    }
}

impl<T: Scalar + PartialOrd> Vector<T> {
    /// Sort ascending in place. NaNs compare equal to everything.
    pub fn sort(&mut self) {
        self.data
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    /// Index and value of the smallest element (first one on ties).
    pub fn min_index(&self) -> Result<(usize, T)> {
        self.extreme("min", |cand, best| cand < best)
    }

    /// Index and value of the largest element (first one on ties).
    pub fn max_index(&self) -> Result<(usize, T)> {
        self.extreme("max", |cand, best| cand > best)
    }

    /// Smallest element.
    pub fn min(&self) -> Result<T> {
        self.min_index().map(|(_, v)| v)
    }

    /// Largest element.
    pub fn max(&self) -> Result<T> {
        self.max_index().map(|(_, v)| v)
    }

    fn extreme(&self, op: &'static str, better: impl Fn(T, T) -> bool) -> Result<(usize, T)> {
        let (&first, rest) = self
            .data
            .split_first()
            .ok_or(Error::NullContainer { op })?;
        let mut best = (0, first);
        for (i, &x) in rest.iter().enumerate() {
            if better(x, best.1) {
                best = (i + 1, x);
            }
        }
        Ok(best)
    }
}

// ── Norms ───────────────────────────────────────────────────────────

impl<T: LinalgScalar> Vector<T> {
    /// Element-wise modulus.
    pub fn abs(&self) -> Vector<T::Real> {
        Vector::from_raw(self.data.iter().map(|&x| x.modulus()).collect())
    }

    /// Euclidean norm `sqrt(Σ |vᵢ|²)`.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]).unwrap();
    /// assert_eq!(v.norm(), 5.0);
    /// ```
    pub fn norm(&self) -> T::Real {
        self.data
            .iter()
            .fold(T::Real::zero(), |acc, &x| {
                let m = x.modulus();
                acc + m * m
            })
            .sqrt()
    }

    /// Element-wise complex conjugate.
    pub fn conj(&self) -> Self {
        Self::from_raw(self.data.iter().map(|&x| x.conj()).collect())
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Formats as the literal accepted by [`Vector::parse`], e.g. `[1 2 3]`.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        write!(f, "]")
    }
}
