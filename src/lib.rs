//! # dense-linalg
//!
//! Dense, heap-allocated matrix and vector containers with runtime
//! dimensions, bounds-checked access and a small kernel of classic
//! algorithms: LU with partial pivoting, inversion, a determinant-guided
//! pseudoinverse, Strassen multiplication and Gaussian-elimination
//! determinants.
//!
//! ## Quick start
//!
//! ```
//! use dense_linalg::{Matrix, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(&[
//!     [2.0_f64, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]).unwrap();
//! let b = Vector::from_slice(&[8.0, -11.0, -3.0]).unwrap();
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//!
//! // Literal syntax: rows separated by ';'
//! let m: Matrix<f64> = "[1 2;3 4]".parse().unwrap();
//! assert_eq!(m.determinant().unwrap(), -2.0);
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: Resizable `Vector<T>` with checked element and range
//!   access, element-wise arithmetic, dot/cross products, sorting and
//!   aggregates.
//!
//! - [`matrix`]: Row-major `Matrix<T>`. A matrix is either null (`0x0`) or
//!   has both dimensions non-zero. Row/column/block slicing, arithmetic,
//!   transpose, `eye`, `diag`, concatenation and outer products.
//!
//! - [`linalg`]: LU decomposition (partial pivoting, singularity flag),
//!   `invert`, `pseudoinverse`, `strassen` and `determinant`. Free functions
//!   plus convenience methods on `Matrix`: `a.solve(&b)`, `a.invert()`,
//!   `a.determinant()`, `a.strassen(&b)`.
//!
//! - [`parse`]: `"[1 2;3 4]"` literals for both containers (`FromStr`).
//!   `Display` prints the same syntax.
//!
//! - [`estimate`]: Discrete LTI system model and linear Kalman filter built
//!   on the kernel. Requires `estimate` feature.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all container elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`)
//!   - [`LinalgScalar`]: real floats and complex numbers, used by the decompositions
//!
//! - [`config`]: Capacity ceilings and numeric thresholds.
//!
//! - [`error`]: The crate-wide [`Error`] enum.
//!
//! ## Errors and logging
//!
//! Every fallible operation returns [`Result`]. Numerically degenerate input
//! (a singular matrix passed to `invert`, an undecidable pseudoinverse) is not
//! an error: the result is filled with NaN and a `log::warn!` is emitted.
//! Install any `log` backend to see those messages.
//!
//! ## Cargo features
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `estimate` | yes     | LTI system model and Kalman filter |
//! | `complex`  | no      | `Complex<f32>` / `Complex<f64>` support via `num-complex` |
//! | `all`      | no      | All features: `estimate` + `complex` |

pub mod config;
pub mod error;
#[cfg(feature = "estimate")]
pub mod estimate;
pub mod linalg;
pub mod matrix;
pub mod parse;
pub mod traits;
pub mod vector;

pub use error::{Axis, Error, Result};
pub use matrix::aliases::{
    Matrixf32, Matrixf64, Matrixi32, Matrixi64, Vectorf32, Vectorf64, Vectori32, Vectori64,
};
#[cfg(feature = "complex")]
pub use matrix::aliases::{Matrixz32, Matrixz64, Vectorz32, Vectorz64};
pub use matrix::Matrix;
pub use traits::{FloatScalar, LinalgScalar, Scalar};
pub use vector::Vector;

#[cfg(feature = "complex")]
pub use num_complex::Complex;
