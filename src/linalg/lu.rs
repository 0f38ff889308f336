use num_traits::Zero;

use crate::config;
use crate::error::{Error, Result};
use crate::traits::LinalgScalar;
use crate::{Matrix, Vector};

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `pivot` must have `n + 1` slots. Slots `0..n` receive the row permutation
/// (row `i` of the factors is row `pivot[i]` of the input) and `pivot[n]`
/// ends at `n` plus the number of row swaps.
///
/// Returns `true` if some column's largest candidate pivot had modulus below
/// [`SINGULARITY_THRESHOLD`](crate::config::SINGULARITY_THRESHOLD). The
/// swap and elimination still run for that column, so `P·A = L·U` holds for
/// any non-zero pivot. An exactly zero pivot leaves non-finite values in the
/// rows below it.
pub fn lu_in_place<T: LinalgScalar>(a: &mut Matrix<T>, pivot: &mut [usize]) -> Result<bool> {
    a.require_square("lu")?;
    let n = a.rows();
    if pivot.len() != n + 1 {
        return Err(Error::DimensionMismatch {
            op: "lu",
            lhs: (1, n + 1),
            rhs: (1, pivot.len()),
        });
    }
    for (i, p) in pivot.iter_mut().enumerate() {
        *p = i;
    }

    let tol = config::singularity_threshold::<T::Real>();
    let mut singular = false;
    let d = a.as_raw_mut();

    for col in 0..n {
        // Partial pivoting: find row with largest modulus in this column
        let mut max_row = col;
        let mut max_val = T::Real::zero();
        for row in col..n {
            let val = d[row * n + col].modulus();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < tol {
            log::debug!("lu: column {col} pivot below threshold (|max| = {max_val:?})");
            singular = true;
        }

        if max_row != col {
            pivot.swap(col, max_row);
            for j in 0..n {
                d.swap(col * n + j, max_row * n + j);
            }
            pivot[n] += 1;
        }

        let p = d[col * n + col];
        for row in (col + 1)..n {
            let factor = d[row * n + col] / p;
            d[row * n + col] = factor;
            for j in (col + 1)..n {
                d[row * n + j] = d[row * n + j] - factor * d[col * n + j];
            }
        }
    }

    Ok(singular)
}

/// Invert from the packed factors of [`lu_in_place`], one column at a time.
///
/// Does not look at the singular flag; a singular factorization produces
/// non-finite entries.
pub fn lu_invert<T: LinalgScalar>(lu: &Matrix<T>, pivot: &[usize]) -> Matrix<T> {
    let n = lu.rows();
    let a = lu.as_raw();
    let mut inv = vec![T::zero(); n * n];

    for j in 0..n {
        // Forward substitution against the permuted identity column
        for i in 0..n {
            let mut sum = if pivot[i] == j { T::one() } else { T::zero() };
            for k in 0..i {
                sum = sum - a[i * n + k] * inv[k * n + j];
            }
            inv[i * n + j] = sum;
        }

        // Back substitution
        for i in (0..n).rev() {
            let mut sum = inv[i * n + j];
            for k in (i + 1)..n {
                sum = sum - a[i * n + k] * inv[k * n + j];
            }
            inv[i * n + j] = sum / a[i * n + i];
        }
    }

    Matrix::from_raw(n, n, inv)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `b` (input) and `x` (output) are separate slices of length n.
pub fn lu_solve<T: LinalgScalar>(lu: &Matrix<T>, pivot: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.rows();
    let a = lu.as_raw();

    // Apply permutation and forward substitution (solve Ly = Pb)
    for i in 0..n {
        let mut sum = b[pivot[i]];
        for j in 0..i {
            sum = sum - a[i * n + j] * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - a[i * n + j] * x[j];
        }
        x[i] = sum / a[i * n + i];
    }
}

/// LU decomposition of a square matrix.
///
/// Stores the packed L/U factors, the `n + 1` slot pivot vector and the
/// singular flag. Unlike a failing constructor, a singular input still
/// yields a decomposition; [`inverse`](Self::inverse) and
/// [`solve`](Self::solve) then log a warning and return NaN.
///
/// # Example
///
/// ```
/// use dense_linalg::{Matrix, Vector};
///
/// let a = Matrix::from_rows(&[[2.0_f64, 1.0], [5.0, 3.0]]).unwrap();
/// let lu = a.lu().unwrap();
/// assert!(!lu.is_singular());
///
/// let b = Vector::from_slice(&[4.0, 11.0]).unwrap();
/// let x = lu.solve(&b).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Lu<T> {
    lu: Matrix<T>,
    pivot: Vec<usize>,
    singular: bool,
}

impl<T: LinalgScalar> Lu<T> {
    /// Decompose a square, non-null matrix.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        let mut lu = a.clone();
        let mut pivot = vec![0; a.rows() + 1];
        let singular = lu_in_place(&mut lu, &mut pivot)?;
        Ok(Self {
            lu,
            pivot,
            singular,
        })
    }

    /// Whether a pivot fell below the singularity threshold.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Row permutation: row `i` of `L·U` is row `permutation()[i]` of the input.
    #[inline]
    pub fn permutation(&self) -> &[usize] {
        &self.pivot[..self.lu.rows()]
    }

    /// The full `n + 1` slot pivot vector.
    #[inline]
    pub fn pivot(&self) -> &[usize] {
        &self.pivot
    }

    /// Number of row swaps performed.
    #[inline]
    pub fn swap_count(&self) -> usize {
        self.pivot[self.lu.rows()] - self.lu.rows()
    }

    /// Packed factors.
    #[inline]
    pub fn factors(&self) -> &Matrix<T> {
        &self.lu
    }

    /// Unit lower-triangular factor L.
    pub fn lower(&self) -> Matrix<T> {
        let n = self.lu.rows();
        let a = self.lu.as_raw();
        let data = (0..n * n)
            .map(|k| match (k / n, k % n) {
                (i, j) if i == j => T::one(),
                (i, j) if i > j => a[k],
                _ => T::zero(),
            })
            .collect();
        Matrix::from_raw(n, n, data)
    }

    /// Upper-triangular factor U.
    pub fn upper(&self) -> Matrix<T> {
        let n = self.lu.rows();
        let a = self.lu.as_raw();
        let data = (0..n * n)
            .map(|k| if k / n <= k % n { a[k] } else { T::zero() })
            .collect();
        Matrix::from_raw(n, n, data)
    }

    /// Inverse of the decomposed matrix, or an all-NaN matrix if singular.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.rows();
        if self.singular {
            log::warn!("matrix is singular, returning {n}x{n} NaN inverse");
            return Matrix::from_raw(n, n, vec![T::lnan(); n * n]);
        }
        lu_invert(&self.lu, &self.pivot)
    }

    /// Solve `Ax = b` for `x`. A singular decomposition yields an all-NaN `x`.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        let n = self.lu.rows();
        if b.len() != n {
            return Err(Error::DimensionMismatch {
                op: "solve",
                lhs: self.lu.size(),
                rhs: (b.len(), 1),
            });
        }
        if self.singular {
            log::warn!("matrix is singular, returning NaN solution");
            return Ok(Vector::from_raw(vec![T::lnan(); n]));
        }
        let mut x = vec![T::zero(); n];
        lu_solve(&self.lu, &self.pivot, b.as_slice(), &mut x);
        Ok(Vector::from_raw(x))
    }

    /// Determinant: product of U's diagonal, negated for an odd swap count.
    pub fn det(&self) -> T {
        let n = self.lu.rows();
        let mut d = if self.swap_count() % 2 == 0 {
            T::one()
        } else {
            T::zero() - T::one()
        };
        for i in 0..n {
            d = d * self.lu.as_raw()[i * n + i];
        }
        d
    }
}

/// Convenience methods on square matrices.
impl<T: LinalgScalar> Matrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<Lu<T>> {
        Lu::new(self)
    }

    /// Solve `Ax = b` for `x` via LU decomposition.
    ///
    /// ```
    /// use dense_linalg::{Matrix, Vector};
    /// let a = Matrix::from_rows(&[
    ///     [2.0_f64, 1.0, -1.0],
    ///     [-3.0, -1.0, 2.0],
    ///     [-2.0, 1.0, 2.0],
    /// ]).unwrap();
    /// let b = Vector::from_slice(&[8.0, -11.0, -3.0]).unwrap();
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        self.lu()?.solve(b)
    }
}
