use crate::error::Result;
use crate::traits::LinalgScalar;
use crate::Matrix;

/// Determinant by Gaussian elimination with pivot normalization.
///
/// Works on a copy using column operations: each non-zero pivot is scaled to
/// one (its reciprocal accumulated in `k`) and the entries to its right are
/// eliminated. The result is the product of the reduced diagonal divided by
/// `k`. A zero pivot is skipped, which leaves a zero on the diagonal and a
/// zero determinant; there is no row exchange and no singularity threshold.
///
/// ```
/// use dense_linalg::Matrix;
/// use dense_linalg::linalg::determinant;
///
/// let a = Matrix::from_rows(&[[3.0_f64, 8.0], [4.0, 6.0]]).unwrap();
/// assert!((determinant(&a).unwrap() - (-14.0)).abs() < 1e-12);
/// ```
pub fn determinant<T: LinalgScalar>(a: &Matrix<T>) -> Result<T> {
    a.require_square("determinant")?;
    let n = a.rows();
    let mut t = a.as_raw().to_vec();
    let mut k = T::one();

    for p in 0..n - 1 {
        let pivot = t[p * n + p];
        if pivot == T::zero() {
            continue;
        }
        let kc = T::one() / pivot;
        k = k * kc;
        for j in p..n {
            t[j * n + p] = t[j * n + p] * kc;
        }
        for c in (p + 1)..n {
            let con = T::zero() - t[p * n + c];
            for i in 0..n {
                t[i * n + c] = t[i * n + c] + t[i * n + p] * con;
            }
        }
    }

    let last = (n - 1) * n + (n - 1);
    if t[last] != T::zero() {
        k = k * (T::one() / t[last]);
        t[last] = T::one();
    }

    let diag = (0..n).fold(T::one(), |acc, i| acc * t[i * n + i]);
    Ok(diag / k)
}

impl<T: LinalgScalar> Matrix<T> {
    /// Determinant. See [`determinant`].
    pub fn determinant(&self) -> Result<T> {
        determinant(self)
    }
}
