use core::ops::Neg;

use crate::config;
use crate::error::{Error, Result};
use crate::traits::Scalar;
use crate::vector::Vector;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, op: &'static str, rhs: &Self) -> Result<()> {
        if self.is_null() || rhs.is_null() {
            return Err(Error::NullContainer { op });
        }
        if self.size() != rhs.size() {
            return Err(Error::DimensionMismatch {
                op,
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, op: &'static str, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_same_shape(op, rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_raw(self.rows, self.cols, data))
    }

    fn map_nonempty(&self, op: &'static str, f: impl Fn(T) -> T) -> Result<Self> {
        if self.is_null() {
            return Err(Error::NullContainer { op });
        }
        Ok(self.map(f))
    }

    // ── Element-wise ────────────────────────────────────────────────

    /// Element-wise sum.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::<i32>::ones(2, 2).unwrap();
    /// assert_eq!(a.add(&b).unwrap(), Matrix::from_rows(&[[2, 3], [4, 5]]).unwrap());
    /// ```
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with("add", rhs, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with("sub", rhs, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn element_mul(&self, rhs: &Self) -> Result<Self> {
        self.zip_with("element_mul", rhs, |a, b| a * b)
    }

    // ── Scalar ──────────────────────────────────────────────────────

    /// Add `s` to every element.
    pub fn add_scalar(&self, s: T) -> Result<Self> {
        self.map_nonempty("add_scalar", |x| x + s)
    }

    /// Subtract `s` from every element.
    pub fn sub_scalar(&self, s: T) -> Result<Self> {
        self.map_nonempty("sub_scalar", |x| x - s)
    }

    /// Multiply every element by `s`.
    pub fn scale(&self, s: T) -> Result<Self> {
        self.map_nonempty("scale", |x| x * s)
    }

    /// Divide every element by `s`. Fails when `s` is exactly zero.
    pub fn div_scalar(&self, s: T) -> Result<Self> {
        if s == T::zero() {
            return Err(Error::DivideByZero { op: "div_scalar" });
        }
        self.map_nonempty("div_scalar", |x| x / s)
    }

    // ── Products ────────────────────────────────────────────────────

    /// Matrix product `self · rhs` (direct triple loop).
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c, Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]).unwrap());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        if self.is_null() || rhs.is_null() {
            return Err(Error::NullContainer { op: "multiply" });
        }
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }
        config::matrix_elements(self.rows, rhs.cols)?;
        Ok(multiply_raw(self, rhs))
    }

    /// Matrix-vector product `self · v`.
    pub fn multiply_vector(&self, v: &Vector<T>) -> Result<Vector<T>> {
        if self.is_null() || v.is_empty() {
            return Err(Error::NullContainer {
                op: "multiply_vector",
            });
        }
        if self.cols != v.len() {
            return Err(Error::DimensionMismatch {
                op: "multiply_vector",
                lhs: self.size(),
                rhs: (v.len(), 1),
            });
        }
        let x = v.as_slice();
        let data = self
            .data
            .chunks_exact(self.cols)
            .map(|row| {
                row.iter()
                    .zip(x.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect();
        Ok(Vector::from_raw(data))
    }

    /// Transpose. The null matrix transposes to itself.
    ///
    /// ```
    /// use dense_linalg::Matrix;
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.size(), (3, 2));
    /// assert_eq!(t[(2, 0)], 3);
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Self {
        let (r, c) = self.size();
        let mut data = Vec::with_capacity(r * c);
        for j in 0..c {
            for i in 0..r {
                data.push(self.data[i * c + j]);
            }
        }
        Self::from_raw(c, r, data)
    }
}

/// Direct product of conformable, non-null matrices.
pub(crate) fn multiply_raw<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let (m, k, n) = (a.rows, a.cols, b.cols);
    let mut data = vec![T::zero(); m * n];
    for i in 0..m {
        for p in 0..k {
            let aip = a.data[i * k + p];
            let brow = &b.data[p * n..(p + 1) * n];
            let crow = &mut data[i * n..(i + 1) * n];
            for (c, &bv) in crow.iter_mut().zip(brow.iter()) {
                *c = *c + aip * bv;
            }
        }
    }
    Matrix::from_raw(m, n, data)
}

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::<f64>::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::<f64>::from_rows(&[[0.5, 0.5], [0.5, 0.5]]).unwrap();
        assert_eq!(
            a.add(&b).unwrap(),
            Matrix::<f64>::from_rows(&[[1.5, 2.5], [3.5, 4.5]]).unwrap()
        );
        assert_eq!(
            a.sub(&b).unwrap(),
            Matrix::<f64>::from_rows(&[[0.5, 1.5], [2.5, 3.5]]).unwrap()
        );
    }

    #[test]
    fn shape_errors() {
        let a = Matrix::<f64>::zeros(2, 3).unwrap();
        let b = Matrix::<f64>::zeros(3, 2).unwrap();
        assert_eq!(
            a.add(&b),
            Err(Error::DimensionMismatch {
                op: "add",
                lhs: (2, 3),
                rhs: (3, 2)
            })
        );
        assert_eq!(
            a.sub(&Matrix::null()),
            Err(Error::NullContainer { op: "sub" })
        );
        assert!(a.multiply(&a).is_err());
        assert!(a.multiply(&b).is_ok());
    }

    #[test]
    fn scalar_ops() {
        let a = Matrix::from_rows(&[[2, 4], [6, 8]]).unwrap();
        assert_eq!(a.add_scalar(1).unwrap()[(1, 1)], 9);
        assert_eq!(a.sub_scalar(2).unwrap()[(0, 0)], 0);
        assert_eq!(a.scale(-1).unwrap()[(1, 0)], -6);
        assert_eq!(a.div_scalar(2).unwrap()[(0, 1)], 2);
        assert_eq!(
            a.div_scalar(0),
            Err(Error::DivideByZero { op: "div_scalar" })
        );
        assert!(Matrix::<i32>::null().scale(2).is_err());
    }

    #[test]
    fn multiply_rect() {
        let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(&[[7, 8], [9, 10], [11, 12]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c, Matrix::from_rows(&[[58, 64], [139, 154]]).unwrap());
    }

    #[test]
    fn multiply_vector() {
        let a = Matrix::<f64>::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        let v = Vector::<f64>::from_slice(&[1.0, -1.0]).unwrap();
        assert_eq!(a.multiply_vector(&v).unwrap().as_slice(), &[-1.0, -1.0, -1.0]);
        let w = Vector::<f64>::from_slice(&[1.0]).unwrap();
        assert!(matches!(
            a.multiply_vector(&w),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn transpose_null_and_involution() {
        assert!(Matrix::<f64>::null().transpose().is_null());
        let m = Matrix::from_fn(3, 5, |i, j| (i * 5 + j) as f64).unwrap();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[(4, 2)], m[(2, 4)]);
    }

    #[test]
    fn element_mul_and_neg() {
        let a = Matrix::from_rows(&[[1, -2], [3, 4]]).unwrap();
        assert_eq!(
            a.element_mul(&a).unwrap(),
            Matrix::from_rows(&[[1, 4], [9, 16]]).unwrap()
        );
        assert_eq!(-&a, Matrix::from_rows(&[[-1, 2], [-3, -4]]).unwrap());
    }
}
