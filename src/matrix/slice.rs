use crate::error::{Axis, Error, Result};
use crate::traits::Scalar;
use crate::vector::Vector;

use super::Matrix;

/// Validate an inclusive `start..=end` range against `len`.
fn check_range(op: &'static str, axis: Axis, start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end >= len {
        return Err(Error::InvalidRange {
            op,
            axis,
            start,
            end,
            len,
        });
    }
    Ok(())
}

/// Validate a selection list: in bounds and non-decreasing.
fn check_selection(op: &'static str, axis: Axis, idx: &[usize], len: usize) -> Result<()> {
    let mut prev = 0;
    for &i in idx {
        if i >= len {
            return Err(Error::IndexOutOfRange {
                op,
                axis,
                index: i,
                len,
            });
        }
        if i < prev {
            return Err(Error::InvalidRange {
                op,
                axis,
                start: prev,
                end: i,
                len,
            });
        }
        prev = i;
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    fn check_row(&self, op: &'static str, row: usize) -> Result<()> {
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
        Ok(())
    }

    fn check_col(&self, op: &'static str, col: usize) -> Result<()> {
        if self.is_null() {
            return Err(Error::NullContainer { op });
        }
        if col >= self.cols {
            return Err(Error::IndexOutOfRange {
                op,
                axis: Axis::Column,
                index: col,
                len: self.cols,
            });
        }
        Ok(())
    }

    // ── Rows / columns ──────────────────────────────────────────────

    /// Copy of row `row`.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.get_row(1).unwrap().as_slice(), &[4, 5, 6]);
    /// ```
    pub fn get_row(&self, row: usize) -> Result<Vector<T>> {
        self.check_row("get_row", row)?;
        let start = row * self.cols;
        Ok(Vector::from_raw(self.data[start..start + self.cols].to_vec()))
    }

    /// Copy of column `col`.
    pub fn get_col(&self, col: usize) -> Result<Vector<T>> {
        self.check_col("get_col", col)?;
        Ok(Vector::from_raw(
            (0..self.rows).map(|i| self.data[i * self.cols + col]).collect(),
        ))
    }

    /// Overwrite row `row`. `values` must have `cols()` elements.
    pub fn set_row(&mut self, row: usize, values: &Vector<T>) -> Result<()> {
        self.check_row("set_row", row)?;
        if values.len() != self.cols {
            return Err(Error::DimensionMismatch {
                op: "set_row",
                lhs: (1, self.cols),
                rhs: (1, values.len()),
            });
        }
        let start = row * self.cols;
        self.data[start..start + self.cols].copy_from_slice(values.as_slice());
        Ok(())
    }

    /// Overwrite column `col`. `values` must have `rows()` elements.
    ///
    /// ```
    /// use dense_linalg::{Matrix, Vector};
    /// let mut m = Matrix::<i32>::zeros(2, 2).unwrap();
    /// m.set_col(1, &Vector::from_slice(&[7, 8]).unwrap()).unwrap();
    /// assert_eq!(m[(0, 1)], 7);
    /// assert_eq!(m[(1, 1)], 8);
    /// ```
    pub fn set_col(&mut self, col: usize, values: &Vector<T>) -> Result<()> {
        self.check_col("set_col", col)?;
        if values.len() != self.rows {
            return Err(Error::DimensionMismatch {
                op: "set_col",
                lhs: (self.rows, 1),
                rhs: (values.len(), 1),
            });
        }
        for (i, &v) in values.iter().enumerate() {
            self.data[i * self.cols + col] = v;
        }
        Ok(())
    }

    /// Copy of rows `start..=end`.
    pub fn get_rows(&self, start: usize, end: usize) -> Result<Self> {
        if self.is_null() {
            return Err(Error::NullContainer { op: "get_rows" });
        }
        self.get_range_impl("get_rows", start, end, 0, self.cols - 1)
    }

    /// Copy of columns `start..=end`.
    pub fn get_cols(&self, start: usize, end: usize) -> Result<Self> {
        if self.is_null() {
            return Err(Error::NullContainer { op: "get_cols" });
        }
        self.get_range_impl("get_cols", 0, self.rows - 1, start, end)
    }

    /// Copy of the block `r1..=r2` x `c1..=c2`.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    /// let b = m.get_range(1, 2, 0, 1).unwrap();
    /// assert_eq!(b, Matrix::from_rows(&[[4, 5], [7, 8]]).unwrap());
    /// assert!(m.get_range(2, 1, 0, 0).is_err());
    /// ```
    pub fn get_range(&self, r1: usize, r2: usize, c1: usize, c2: usize) -> Result<Self> {
        self.get_range_impl("get_range", r1, r2, c1, c2)
    }

    fn get_range_impl(
        &self,
        op: &'static str,
        r1: usize,
        r2: usize,
        c1: usize,
        c2: usize,
    ) -> Result<Self> {
        if self.is_null() {
            return Err(Error::NullContainer { op });
        }
        check_range(op, Axis::Row, r1, r2, self.rows)?;
        check_range(op, Axis::Column, c1, c2, self.cols)?;
        let (nr, nc) = (r2 - r1 + 1, c2 - c1 + 1);
        let mut data = Vec::with_capacity(nr * nc);
        for i in r1..=r2 {
            let start = i * self.cols;
            data.extend_from_slice(&self.data[start + c1..=start + c2]);
        }
        Ok(Self::from_raw(nr, nc, data))
    }

    /// Overwrite rows starting at `start` with `block`, which must have
    /// `cols()` columns.
    pub fn set_rows(&mut self, start: usize, block: &Self) -> Result<()> {
        if block.cols != self.cols {
            return Err(Error::DimensionMismatch {
                op: "set_rows",
                lhs: self.size(),
                rhs: block.size(),
            });
        }
        self.set_block("set_rows", start, 0, block)
    }

    /// Overwrite columns starting at `start` with `block`, which must have
    /// `rows()` rows.
    pub fn set_cols(&mut self, start: usize, block: &Self) -> Result<()> {
        if block.rows != self.rows {
            return Err(Error::DimensionMismatch {
                op: "set_cols",
                lhs: self.size(),
                rhs: block.size(),
            });
        }
        self.set_block("set_cols", 0, start, block)
    }

    /// Overwrite the block whose top-left corner is `(r0, c0)`.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let mut m = Matrix::<i32>::zeros(3, 3).unwrap();
    /// let b = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// m.set_submatrix(1, 1, &b).unwrap();
    /// assert_eq!(m[(2, 2)], 4);
    /// assert!(m.set_submatrix(2, 2, &b).is_err());
    /// ```
    pub fn set_submatrix(&mut self, r0: usize, c0: usize, block: &Self) -> Result<()> {
        self.set_block("set_submatrix", r0, c0, block)
    }

    fn set_block(&mut self, op: &'static str, r0: usize, c0: usize, block: &Self) -> Result<()> {
        if self.is_null() || block.is_null() {
            return Err(Error::NullContainer { op });
        }
        check_range(op, Axis::Row, r0, r0.saturating_add(block.rows - 1), self.rows)?;
        check_range(op, Axis::Column, c0, c0.saturating_add(block.cols - 1), self.cols)?;
        for i in 0..block.rows {
            let dst = (r0 + i) * self.cols + c0;
            let src = i * block.cols;
            self.data[dst..dst + block.cols].copy_from_slice(&block.data[src..src + block.cols]);
        }
        Ok(())
    }

    /// Select the rows in `row_idx` and the columns in `col_idx`.
    ///
    /// Both lists must be non-decreasing and in bounds. Either list being
    /// empty yields the null matrix.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    /// let s = m.select(&[0, 2], &[1, 2]).unwrap();
    /// assert_eq!(s, Matrix::from_rows(&[[2, 3], [8, 9]]).unwrap());
    /// assert!(m.select(&[], &[0]).unwrap().is_null());
    /// ```
    pub fn select(&self, row_idx: &[usize], col_idx: &[usize]) -> Result<Self> {
        if row_idx.is_empty() || col_idx.is_empty() {
            return Ok(Self::null());
        }
        if self.is_null() {
            return Err(Error::NullContainer { op: "select" });
        }
        check_selection("select", Axis::Row, row_idx, self.rows)?;
        check_selection("select", Axis::Column, col_idx, self.cols)?;
        let mut data = Vec::with_capacity(row_idx.len() * col_idx.len());
        for &i in row_idx {
            for &j in col_idx {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self::from_vec(row_idx.len(), col_idx.len(), data)
    }

    // ── Swaps ───────────────────────────────────────────────────────

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row("swap_rows", a)?;
        self.check_row("swap_rows", b)?;
        if a != b {
            let n = self.cols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
        Ok(())
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_col("swap_cols", a)?;
        self.check_col("swap_cols", b)?;
        if a != b {
            let n = self.cols;
            for i in 0..self.rows {
                self.data.swap(i * n + a, i * n + b);
            }
        }
        Ok(())
    }
}
