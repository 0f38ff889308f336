pub mod aliases;
mod ops;
mod slice;
mod util;

pub(crate) use ops::multiply_raw;

use core::ops::{Index, IndexMut};

use crate::config;
use crate::error::{Axis, Error, Result};
use crate::traits::Scalar;

/// Resizable, bounds-checked dense matrix.
///
/// Row-major `Vec<T>` storage with runtime dimensions. A matrix is either
/// null (`0x0`) or has both dimensions non-zero: asking for an `n x 0` or
/// `0 x n` shape yields the null matrix. Construction and
/// [`set_size`](Self::set_size) zero-fill every element, and the element
/// count can never exceed [`MAX_MATRIX_ELEMENTS`](crate::config::MAX_MATRIX_ELEMENTS).
///
/// Arithmetic is exposed as named fallible methods (`add`, `multiply`, ...)
/// that return a fresh matrix.
///
/// # Examples
///
/// ```
/// use dense_linalg::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.rows(), 2);
/// assert_eq!(a.cols(), 2);
///
/// let b = Matrix::<f64>::eye(3).unwrap();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled `rows x cols` matrix.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::<f64>::new(2, 3).unwrap();
    /// assert_eq!(m.size(), (2, 3));
    /// assert_eq!(m[(1, 2)], 0.0);
    ///
    /// assert!(Matrix::<f64>::new(0, 5).unwrap().is_null());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::fill(rows, cols, T::zero())
    }

    /// Same as [`new`](Self::new).
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::fill(rows, cols, T::zero())
    }

    /// Create a matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::fill(rows, cols, T::one())
    }

    /// Create a matrix filled with `value`.
    pub fn fill(rows: usize, cols: usize, value: T) -> Result<Self> {
        let n = config::matrix_elements(rows, cols)?;
        if n == 0 {
            return Ok(Self::null());
        }
        Ok(Self {
            data: vec![value; n],
            rows,
            cols,
        })
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let id = Matrix::<i32>::eye(3).unwrap();
    /// assert_eq!(id[(2, 2)], 1);
    /// assert_eq!(id[(2, 1)], 0);
    /// ```
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Build from a slice of equally long rows.
    ///
    /// Accepts arrays (`&[[T; C]]`) as well as `&[Vec<T>]`. A ragged row
    /// yields [`Error::DimensionMismatch`].
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m[(1, 0)], 4);
    ///
    /// let ragged = vec![vec![1, 2], vec![3]];
    /// assert!(Matrix::from_rows(&ragged).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let n = config::matrix_elements(nrows, ncols)?;
        let mut data = Vec::with_capacity(n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(Error::DimensionMismatch {
                    op: "from_rows",
                    lhs: (1, row.len()),
                    rhs: (1, ncols),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(nrows, ncols, data)
    }

    /// Take ownership of row-major storage.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(Matrix::from_vec(2, 2, vec![1.0]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let n = config::matrix_elements(rows, cols)?;
        if data.len() != n {
            return Err(Error::DimensionMismatch {
                op: "from_vec",
                lhs: (rows, cols),
                rhs: (1, data.len()),
            });
        }
        if n == 0 {
            return Ok(Self::null());
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64).unwrap();
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Result<Self> {
        let n = config::matrix_elements(rows, cols)?;
        if n == 0 {
            return Ok(Self::null());
        }
        let mut data = Vec::with_capacity(n);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, rows, cols })
    }

    /// Resize to `rows x cols`, zero-filling every element.
    ///
    /// Existing contents are discarded. A zero dimension yields the null
    /// matrix.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let mut m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// m.set_size(3, 1).unwrap();
    /// assert_eq!(m.size(), (3, 1));
    /// assert_eq!(m[(0, 0)], 0);
    /// assert!(m.set_size(16_001, 16_000).is_err());
    /// ```
    pub fn set_size(&mut self, rows: usize, cols: usize) -> Result<()> {
        *self = Self::zeros(rows, cols)?;
        Ok(())
    }

    /// Set every element to zero.
    pub fn set_zeros(&mut self) {
        self.data.iter_mut().for_each(|x| *x = T::zero());
    }

    /// Set every element to one.
    pub fn set_ones(&mut self) {
        self.data.iter_mut().for_each(|x| *x = T::one());
    }
}

impl<T> Matrix<T> {
    /// The `0x0` matrix.
    pub const fn null() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix is square (the null matrix counts as square).
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix is `0x0`.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.data.is_empty()
    }

    /// Release storage and become the null matrix.
    pub fn clear(&mut self) {
        *self = Self::null();
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Row-major storage.
    #[inline]
    pub(crate) fn as_raw(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_raw_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Wrap row-major storage already known to be `rows * cols` long and
    /// within limits.
    #[inline]
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        if data.is_empty() {
            return Self::null();
        }
        Self { data, rows, cols }
    }

    /// Flat offset of `(row, col)`, or the error `op` reports.
    #[inline]
    pub(crate) fn offset(&self, op: &'static str, row: usize, col: usize) -> Result<usize> {
        if self.is_null() {
            return Err(Error::NullContainer { op });
        }
        if row >= self.rows {
            return Err(Error::IndexOutOfRange {
                op,
                axis: Axis::Row,
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(Error::IndexOutOfRange {
                op,
                axis: Axis::Column,
                index: col,
                len: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

// ── Element access ──────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Element at `(row, col)`.
    ///
    /// ```
    /// use dense_linalg::{Error, Matrix};
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.get(1, 0), Ok(3));
    /// assert!(matches!(m.get(2, 1), Err(Error::IndexOutOfRange { .. })));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let k = self.offset("get", row, col)?;
        Ok(self.data[k])
    }

    /// Mutable reference to the element at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let k = self.offset("get_mut", row, col)?;
        Ok(&mut self.data[k])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let k = self.offset("set", row, col)?;
        self.data[k] = value;
        Ok(())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics with an [`Error::IndexOutOfRange`] message on a bad index.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.offset("index", row, col) {
            Ok(k) => &self.data[k],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.offset("index", row, col) {
            Ok(k) => &mut self.data[k],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
