use core::fmt;

use crate::config;
use crate::error::{Error, Result};
use crate::traits::{LinalgScalar, Scalar};
use crate::vector::Vector;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1.0_f64, 4.0], [9.0, 16.0]]).unwrap();
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        Matrix::from_raw(self.rows, self.cols, self.data.iter().map(|&x| f(x)).collect())
    }
}

impl<T: LinalgScalar> Matrix<T> {
    /// Element-wise modulus.
    pub fn abs(&self) -> Matrix<T::Real> {
        self.map(|x| x.modulus())
    }

    /// Element-wise complex conjugate.
    pub fn conj(&self) -> Self {
        self.map(|x| x.conj())
    }

    /// Whether any element is NaN.
    pub fn has_nan(&self) -> bool {
        self.data.iter().any(|&x| x.lis_nan())
    }

    /// Matrix of the given shape with every element NaN.
    pub(crate) fn nan(rows: usize, cols: usize) -> Result<Self> {
        Self::fill(rows, cols, T::lnan())
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of all elements (zero for the null matrix).
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> Result<T> {
        self.require_square("trace")?;
        Ok((0..self.rows).fold(T::zero(), |acc, i| acc + self.data[i * self.cols + i]))
    }

    /// Row-major flattening into a vector.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.to_vector().unwrap().as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn to_vector(&self) -> Result<Vector<T>> {
        Vector::from_slice(&self.data)
    }

    /// Fail unless the matrix is square and non-null.
    pub(crate) fn require_square(&self, op: &'static str) -> Result<()> {
        if self.is_null() {
            return Err(Error::NullContainer { op });
        }
        if !self.is_square() {
            return Err(Error::NonSquare {
                op,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl<T: Scalar + PartialOrd> Matrix<T> {
    /// Smallest element.
    pub fn min(&self) -> Result<T> {
        self.extreme("min", |cand, best| cand < best)
    }

    /// Largest element.
    pub fn max(&self) -> Result<T> {
        self.extreme("max", |cand, best| cand > best)
    }

    fn extreme(&self, op: &'static str, better: impl Fn(T, T) -> bool) -> Result<T> {
        let (&first, rest) = self
            .data
            .split_first()
            .ok_or(Error::NullContainer { op })?;
        Ok(rest
            .iter()
            .fold(first, |best, &x| if better(x, best) { x } else { best }))
    }
}

// ── Diagonal ────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Main diagonal of a square matrix.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.diag().unwrap().as_slice(), &[1, 4]);
    /// assert!(Matrix::<i32>::zeros(2, 3).unwrap().diag().is_err());
    /// ```
    pub fn diag(&self) -> Result<Vector<T>> {
        self.require_square("diag")?;
        Ok(Vector::from_raw(
            (0..self.rows).map(|i| self.data[i * self.cols + i]).collect(),
        ))
    }

    /// Square matrix with `d` on the diagonal.
    ///
    /// ```
    /// use dense_linalg::{Matrix, Vector};
    /// let d = Vector::from_slice(&[1.0, 2.0]).unwrap();
    /// let m = Matrix::from_diag(&d).unwrap();
    /// assert_eq!(m, Matrix::from_rows(&[[1.0, 0.0], [0.0, 2.0]]).unwrap());
    /// ```
    pub fn from_diag(d: &Vector<T>) -> Result<Self> {
        let n = d.len();
        let mut m = Self::zeros(n, n)?;
        for (i, &x) in d.iter().enumerate() {
            m.data[i * n + i] = x;
        }
        Ok(m)
    }
}

// ── Concatenation ───────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// `[self rhs]`: place `rhs` to the right. Row counts must match.
    ///
    /// A null operand contributes nothing.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let a = Matrix::from_rows(&[[1], [2]]).unwrap();
    /// let b = Matrix::from_rows(&[[3, 4], [5, 6]]).unwrap();
    /// let c = a.concat_hor(&b).unwrap();
    /// assert_eq!(c, Matrix::from_rows(&[[1, 3, 4], [2, 5, 6]]).unwrap());
    /// ```
    pub fn concat_hor(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_null() {
            return Ok(self.clone());
        }
        if self.is_null() {
            return Ok(rhs.clone());
        }
        if self.rows != rhs.rows {
            return Err(Error::DimensionMismatch {
                op: "concat_hor",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        let cols = self.cols + rhs.cols;
        let n = config::matrix_elements(self.rows, cols)?;
        let mut data = Vec::with_capacity(n);
        for i in 0..self.rows {
            data.extend_from_slice(&self.data[i * self.cols..(i + 1) * self.cols]);
            data.extend_from_slice(&rhs.data[i * rhs.cols..(i + 1) * rhs.cols]);
        }
        Ok(Self::from_raw(self.rows, cols, data))
    }

    /// `[self; rhs]`: place `rhs` below. Column counts must match.
    pub fn concat_ver(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_null() {
            return Ok(self.clone());
        }
        if self.is_null() {
            return Ok(rhs.clone());
        }
        if self.cols != rhs.cols {
            return Err(Error::DimensionMismatch {
                op: "concat_ver",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        let rows = self.rows + rhs.rows;
        let n = config::matrix_elements(rows, self.cols)?;
        let mut data = Vec::with_capacity(n);
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&rhs.data);
        Ok(Self::from_raw(rows, self.cols, data))
    }

    /// Outer product `a · bᵀ`, shape `a.len() x b.len()`.
    ///
    /// ```
    /// use dense_linalg::{Matrix, Vector};
    /// let a = Vector::from_slice(&[1, 2]).unwrap();
    /// let b = Vector::from_slice(&[3, 4, 5]).unwrap();
    /// let m = Matrix::outer_product(&a, &b).unwrap();
    /// assert_eq!(m, Matrix::from_rows(&[[3, 4, 5], [6, 8, 10]]).unwrap());
    /// ```
    pub fn outer_product(a: &Vector<T>, b: &Vector<T>) -> Result<Self> {
        if a.is_empty() || b.is_empty() {
            return Err(Error::NullContainer {
                op: "outer_product",
            });
        }
        Self::from_fn(a.len(), b.len(), |i, j| a.as_slice()[i] * b.as_slice()[j])
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Formats as the literal accepted by [`Matrix::parse`], e.g. `[1 2;3 4]`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ";")?;
            }
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                fmt::Display::fmt(&self.data[i * self.cols + j], f)?;
            }
        }
        write!(f, "]")
    }
}
