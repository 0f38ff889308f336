//! Decompositions and the algorithms built on them.
//!
//! Free functions take `&Matrix<T>` and return fresh results; each is also
//! available as a method on [`Matrix`](crate::Matrix):
//! `a.lu()`, `a.solve(&b)`, `a.invert()`, `a.pseudoinverse()`,
//! `a.determinant()`, `a.strassen(&b)`.

pub(crate) mod determinant;
pub(crate) mod inverse;
pub(crate) mod lu;
pub(crate) mod strassen;

pub use determinant::determinant;
pub use inverse::{invert, pseudoinverse};
pub use lu::{lu_in_place, lu_invert, lu_solve, Lu};
pub use strassen::strassen;
