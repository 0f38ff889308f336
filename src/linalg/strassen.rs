use crate::config::{self, STRASSEN_LEAF_DIVISOR};
use crate::error::{Error, Result};
use crate::matrix::multiply_raw;
use crate::traits::Scalar;
use crate::Matrix;

/// Strassen product of two square matrices of equal size.
///
/// Both operands are zero-padded to the next power of two `m`, multiplied
/// recursively with the seven-product scheme, and the result is cut back to
/// `n x n`. Blocks of size `ceil(m / 32)` or smaller are multiplied
/// directly. Works for integer element types as well as floats; for floats
/// the result is close to, but not bit-identical with, [`Matrix::multiply`].
///
/// ```
/// use dense_linalg::Matrix;
/// use dense_linalg::linalg::strassen;
///
/// let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
/// let b = Matrix::from_rows(&[[1, -2, 3], [4, -5, 2], [-9, -2, 8]]).unwrap();
/// let c = strassen(&a, &b).unwrap();
/// assert_eq!(c, Matrix::from_rows(&[[-18, -18, 31], [-30, -45, 70], [-42, -72, 109]]).unwrap());
/// ```
pub fn strassen<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if a.is_null() || b.is_null() {
        return Err(Error::NullContainer { op: "strassen" });
    }
    a.require_square("strassen")?;
    b.require_square("strassen")?;
    // Operands of different order report the order pair as the shape.
    if a.rows() != b.rows() {
        return Err(Error::NonSquare {
            op: "strassen",
            rows: a.rows(),
            cols: b.rows(),
        });
    }

    let n = a.rows();
    let m = n.next_power_of_two();
    config::matrix_elements(m, m)?;
    let leaf = (m + STRASSEN_LEAF_DIVISOR - 1) / STRASSEN_LEAF_DIVISOR;
    log::trace!("strassen: n = {n}, padded to {m}, leaf size {leaf}");

    let c = recurse(&pad(a, m), &pad(b, m), leaf);
    Ok(truncate(&c, n))
}

fn recurse<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, leaf: usize) -> Matrix<T> {
    let size = a.rows();
    if size <= leaf {
        return multiply_raw(a, b);
    }

    let [a11, a12, a21, a22] = split(a);
    let [b11, b12, b21, b22] = split(b);

    let m1 = recurse(&add(&a11, &a22), &add(&b11, &b22), leaf);
    let m2 = recurse(&add(&a21, &a22), &b11, leaf);
    let m3 = recurse(&a11, &sub(&b12, &b22), leaf);
    let m4 = recurse(&a22, &sub(&b21, &b11), leaf);
    let m5 = recurse(&add(&a11, &a12), &b22, leaf);
    let m6 = recurse(&sub(&a21, &a11), &add(&b11, &b12), leaf);
    let m7 = recurse(&sub(&a12, &a22), &add(&b21, &b22), leaf);

    let c11 = add(&sub(&add(&m1, &m4), &m5), &m7);
    let c12 = add(&m3, &m5);
    let c21 = add(&m2, &m4);
    let c22 = add(&add(&sub(&m1, &m2), &m3), &m6);

    join(&c11, &c12, &c21, &c22)
}

// ── Block helpers (operands always share one square size) ──────────

fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    zip(a, b, |x, y| x + y)
}

fn sub<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    zip(a, b, |x, y| x - y)
}

fn zip<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, f: impl Fn(T, T) -> T) -> Matrix<T> {
    let data = a
        .as_raw()
        .iter()
        .zip(b.as_raw().iter())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Matrix::from_raw(a.rows(), a.cols(), data)
}

/// Quadrants `[11, 12, 21, 22]` of an even-sized square matrix.
fn split<T: Scalar>(m: &Matrix<T>) -> [Matrix<T>; 4] {
    let n = m.rows();
    let h = n / 2;
    let d = m.as_raw();
    let block = |r0: usize, c0: usize| {
        let mut data = Vec::with_capacity(h * h);
        for i in r0..r0 + h {
            data.extend_from_slice(&d[i * n + c0..i * n + c0 + h]);
        }
        Matrix::from_raw(h, h, data)
    };
    [block(0, 0), block(0, h), block(h, 0), block(h, h)]
}

fn join<T: Scalar>(c11: &Matrix<T>, c12: &Matrix<T>, c21: &Matrix<T>, c22: &Matrix<T>) -> Matrix<T> {
    let h = c11.rows();
    let n = 2 * h;
    let mut data = Vec::with_capacity(n * n);
    for (left, right) in [(c11, c12), (c21, c22)] {
        for i in 0..h {
            data.extend_from_slice(&left.as_raw()[i * h..(i + 1) * h]);
            data.extend_from_slice(&right.as_raw()[i * h..(i + 1) * h]);
        }
    }
    Matrix::from_raw(n, n, data)
}

fn pad<T: Scalar>(a: &Matrix<T>, m: usize) -> Matrix<T> {
    let n = a.rows();
    if n == m {
        return a.clone();
    }
    let mut data = vec![T::zero(); m * m];
    for i in 0..n {
        data[i * m..i * m + n].copy_from_slice(&a.as_raw()[i * n..(i + 1) * n]);
    }
    Matrix::from_raw(m, m, data)
}

fn truncate<T: Scalar>(c: &Matrix<T>, n: usize) -> Matrix<T> {
    let m = c.rows();
    if n == m {
        return c.clone();
    }
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        data.extend_from_slice(&c.as_raw()[i * m..i * m + n]);
    }
    Matrix::from_raw(n, n, data)
}

impl<T: Scalar> Matrix<T> {
    /// Strassen product. See [`strassen`].
    pub fn strassen(&self, rhs: &Self) -> Result<Self> {
        strassen(self, rhs)
    }
}
