use crate::error::{Error, Result};
use crate::linalg::{determinant, Lu};
use crate::traits::LinalgScalar;
use crate::Matrix;

/// Inverse of a square matrix.
///
/// A `1x1` matrix is inverted directly as `1 / a`. Larger matrices go through
/// [`Lu`]; if the decomposition flags the matrix as singular a warning is
/// logged and the result is an `n x n` matrix of NaN.
///
/// Non-square input is an error; use [`pseudoinverse`] for those.
///
/// ```
/// use dense_linalg::Matrix;
/// use dense_linalg::linalg::invert;
///
/// let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]).unwrap();
/// let id = a.multiply(&invert(&a).unwrap()).unwrap();
/// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!(id[(0, 1)].abs() < 1e-12);
///
/// let singular = Matrix::from_rows(&[[1.0_f64, 2.0], [2.0, 4.0]]).unwrap();
/// assert!(invert(&singular).unwrap().iter().all(|x| x.is_nan()));
/// ```
pub fn invert<T: LinalgScalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    a.require_square("invert")?;
    if a.rows() == 1 {
        return Ok(Matrix::from_raw(1, 1, vec![T::one() / a.as_raw()[0]]));
    }
    Ok(Lu::new(a)?.inverse())
}

/// Moore-Penrose pseudoinverse through the one-sided normal equations.
///
/// Square input is forwarded to [`invert`]. Otherwise the branch is picked by
/// comparing determinant magnitudes:
///
/// - `|det(AᵀA)| > |det(AAᵀ)|`: left inverse `(AᵀA)⁻¹Aᵀ`
/// - `|det(AᵀA)| < |det(AAᵀ)|`: right inverse `Aᵀ(AAᵀ)⁻¹`
/// - equal (typically both zero) or NaN: a warning is logged and the result
///   is a `cols x rows` NaN matrix.
///
/// The comparison is a heuristic, not a rank test.
///
/// ```
/// use dense_linalg::Matrix;
/// use dense_linalg::linalg::pseudoinverse;
///
/// let a = Matrix::from_rows(&[[-3.0_f64, -4.0], [4.0, 6.0], [1.0, 1.0]]).unwrap();
/// let p = pseudoinverse(&a).unwrap();
/// assert_eq!(p.size(), (2, 3));
/// let id = p.multiply(&a).unwrap();
/// assert!((id[(0, 0)] - 1.0).abs() < 1e-10);
/// assert!(id[(1, 0)].abs() < 1e-10);
/// ```
pub fn pseudoinverse<T: LinalgScalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    if a.is_null() {
        return Err(Error::NullContainer {
            op: "pseudoinverse",
        });
    }
    if a.is_square() {
        return invert(a);
    }

    let at = a.transpose();
    let ata = at.multiply(a)?;
    let aat = a.multiply(&at)?;
    let d_ata = determinant(&ata)?.modulus();
    let d_aat = determinant(&aat)?.modulus();
    log::trace!("pseudoinverse: |det(AtA)| = {d_ata:?}, |det(AAt)| = {d_aat:?}");

    if d_ata > d_aat {
        invert(&ata)?.multiply(&at)
    } else if d_ata < d_aat {
        at.multiply(&invert(&aat)?)
    } else {
        log::warn!(
            "pseudoinverse of {}x{} matrix is ill-conditioned, returning NaN",
            a.rows(),
            a.cols()
        );
        Matrix::nan(a.cols(), a.rows())
    }
}

impl<T: LinalgScalar> Matrix<T> {
    /// Inverse of a square matrix. See [`invert`].
    pub fn invert(&self) -> Result<Self> {
        invert(self)
    }

    /// Pseudoinverse. See [`pseudoinverse`].
    pub fn pseudoinverse(&self) -> Result<Self> {
        pseudoinverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_identity(m: &Matrix<f64>, tol: f64) {
        assert!(m.is_square());
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (m[(i, j)] - expected).abs() < tol,
                    "({i}, {j}) = {} in {m}",
                    m[(i, j)]
                );
            }
        }
    }

    #[test]
    fn invert_3x3_known() {
        let a = Matrix::<f64>::from_rows(&[[7.0, 2.0, 1.0], [0.0, 3.0, -1.0], [-3.0, 4.0, -2.0]]).unwrap();
        let inv = invert(&a).unwrap();
        let expected =
            Matrix::<f64>::from_rows(&[[-2.0, 8.0, -5.0], [3.0, -11.0, 7.0], [9.0, -34.0, 21.0]]).unwrap();
        for (x, y) in inv.iter().zip(expected.iter()) {
            assert!((x - y).abs() < 1e-10);
        }
        assert_identity(&a.multiply(&inv).unwrap(), 1e-10);
        assert_identity(&inv.multiply(&a).unwrap(), 1e-10);
    }

    #[test]
    fn invert_1x1() {
        let a = Matrix::<f64>::from_rows(&[[4.0]]).unwrap();
        assert_eq!(invert(&a).unwrap()[(0, 0)], 0.25);
    }

    #[test]
    fn invert_singular_is_nan() {
        let a = Matrix::<f64>::from_rows(&[[1.0, 0.0, 0.0], [-2.0, 0.0, 0.0], [4.0, 6.0, 1.0]]).unwrap();
        let inv = a.invert().unwrap();
        assert_eq!(inv.size(), (3, 3));
        assert!(inv.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn invert_errors() {
        let r = Matrix::<f64>::zeros(2, 3).unwrap();
        assert!(matches!(invert(&r), Err(Error::NonSquare { op: "invert", .. })));
        assert_eq!(
            invert(&Matrix::<f64>::null()),
            Err(Error::NullContainer { op: "invert" })
        );
    }

    #[test]
    fn pinv_wide_right_inverse() {
        let a = Matrix::<f64>::from_rows(&[[1.0, 1.0, 1.0, 1.0], [5.0, 7.0, 7.0, 9.0]]).unwrap();
        let p = pseudoinverse(&a).unwrap();
        assert_eq!(p.size(), (4, 2));
        assert_identity(&a.multiply(&p).unwrap(), 1e-10);
    }

    #[test]
    fn pinv_tall_left_inverse() {
        let a = Matrix::<f64>::from_rows(&[[-3.0, -4.0], [4.0, 6.0], [1.0, 1.0]]).unwrap();
        let p = a.pseudoinverse().unwrap();
        assert_eq!(p.size(), (2, 3));
        assert_identity(&p.multiply(&a).unwrap(), 1e-10);
    }

    #[test]
    fn pinv_square_delegates() {
        let a = Matrix::<f64>::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
        assert_eq!(pseudoinverse(&a).unwrap(), invert(&a).unwrap());
    }

    #[test]
    fn pinv_rank_deficient_is_nan() {
        let a = Matrix::<f64>::from_rows(&[[1.0, 0.0, 1.0, 0.0], [1.0, 0.0, 1.0, 0.0]]).unwrap();
        let p = pseudoinverse(&a).unwrap();
        assert_eq!(p.size(), (4, 2));
        assert!(p.iter().all(|x| x.is_nan()));

        let b = Matrix::<f64>::from_rows(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]).unwrap();
        let q = pseudoinverse(&b).unwrap();
        assert_eq!(q.size(), (2, 3));
        assert!(q.has_nan());
    }
}
