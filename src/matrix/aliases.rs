//! Element-type aliases for [`Matrix`] and [`Vector`].

use super::Matrix;
use crate::vector::Vector;

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Matrix with `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Matrix with `i64` elements.
pub type Matrixi64 = Matrix<i64>;

/// Vector with `f32` elements.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` elements.
pub type Vectorf64 = Vector<f64>;
/// Vector with `i32` elements.
pub type Vectori32 = Vector<i32>;
/// Vector with `i64` elements.
pub type Vectori64 = Vector<i64>;

/// Matrix with `Complex<f32>` elements.
#[cfg(feature = "complex")]
pub type Matrixz32 = Matrix<num_complex::Complex<f32>>;
/// Matrix with `Complex<f64>` elements.
#[cfg(feature = "complex")]
pub type Matrixz64 = Matrix<num_complex::Complex<f64>>;

/// Vector with `Complex<f32>` elements.
#[cfg(feature = "complex")]
pub type Vectorz32 = Vector<num_complex::Complex<f32>>;
/// Vector with `Complex<f64>` elements.
#[cfg(feature = "complex")]
pub type Vectorz64 = Vector<num_complex::Complex<f64>>;
