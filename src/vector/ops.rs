use core::ops::Neg;

use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::Vector;

impl<T: Scalar> Vector<T> {
    fn check_pair(&self, op: &'static str, rhs: &Self) -> Result<()> {
        if self.is_empty() || rhs.is_empty() {
            return Err(Error::NullContainer { op });
        }
        if self.len() != rhs.len() {
            return Err(Error::DimensionMismatch {
                op,
                lhs: (1, self.len()),
                rhs: (1, rhs.len()),
            });
        }
        Ok(())
    }

    fn zip_with(&self, op: &'static str, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_pair(op, rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_raw(data))
    }

    fn map_nonempty(&self, op: &'static str, f: impl Fn(T) -> T) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::NullContainer { op });
        }
        Ok(Self::from_raw(self.data.iter().map(|&x| f(x)).collect()))
    }

    // ── Element-wise ────────────────────────────────────────────────

    /// Element-wise sum.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let a = Vector::from_slice(&[1, 2, 3]).unwrap();
    /// let b = Vector::from_slice(&[10, 20, 30]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[11, 22, 33]);
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

    /// Dot product `Σ aᵢ·bᵢ` (no conjugation).
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T> {
        self.check_pair("dot", rhs)?;
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(rhs.data.iter()) {
            sum = sum + a * b;
        }
        Ok(sum)
    }

    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use dense_linalg::Vector;
    /// let x = Vector::from_slice(&[1, 0, 0]).unwrap();
    /// let y = Vector::from_slice(&[0, 1, 0]).unwrap();
    /// assert_eq!(x.cross(&y).unwrap().as_slice(), &[0, 0, 1]);
    /// ```
    pub fn cross(&self, rhs: &Self) -> Result<Self> {
        self.check_pair("cross", rhs)?;
        if self.len() != 3 {
            return Err(Error::DimensionMismatch {
                op: "cross",
                lhs: (1, self.len()),
                rhs: (1, 3),
            });
        }
        let (a, b) = (&self.data, &rhs.data);
        Ok(Self::from_raw(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
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
    ///
    /// ```
    /// use dense_linalg::{Error, Vector};
    /// let v = Vector::from_slice(&[2.0, 4.0]).unwrap();
    /// assert_eq!(v.div_scalar(2.0).unwrap().as_slice(), &[1.0, 2.0]);
    /// assert_eq!(v.div_scalar(0.0), Err(Error::DivideByZero { op: "div_scalar" }));
    /// ```
    pub fn div_scalar(&self, s: T) -> Result<Self> {
        if s == T::zero() {
            return Err(Error::DivideByZero { op: "div_scalar" });
        }
        self.map_nonempty("div_scalar", |x| x / s)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(self.data.into_iter().map(|x| -x).collect())
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        Vector::from_raw(self.data.iter().map(|&x| -x).collect())
    }
}
