//! Compile-time limits and tolerances.

use num_traits::NumCast;

use crate::error::{Error, Result};
use crate::traits::FloatScalar;

/// Largest number of elements a [`Vector`](crate::Vector) may hold.
pub const MAX_VECTOR_LEN: usize = 16_000;

/// Largest number of elements (`rows * cols`) a [`Matrix`](crate::Matrix) may hold.
pub const MAX_MATRIX_ELEMENTS: usize = 16_000 * 16_000;

/// Pivot modulus below which LU decomposition flags the matrix as singular.
pub const SINGULARITY_THRESHOLD: f64 = 1e-9;

/// Strassen recursion stops at blocks of `ceil(padded_size / STRASSEN_LEAF_DIVISOR)`.
pub const STRASSEN_LEAF_DIVISOR: usize = 32;

/// [`SINGULARITY_THRESHOLD`] in the caller's real type.
pub(crate) fn singularity_threshold<R: FloatScalar>() -> R {
    <R as NumCast>::from(SINGULARITY_THRESHOLD).unwrap_or_else(R::epsilon)
}

pub(crate) fn check_vector_len(len: usize) -> Result<()> {
    if len > MAX_VECTOR_LEN {
        return Err(Error::Capacity {
            requested: len,
            max: MAX_VECTOR_LEN,
        });
    }
    Ok(())
}

/// Element count of a `rows x cols` matrix, rejecting overflow and the ceiling.
pub(crate) fn matrix_elements(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(n) if n <= MAX_MATRIX_ELEMENTS => Ok(n),
        Some(n) => Err(Error::Capacity {
            requested: n,
            max: MAX_MATRIX_ELEMENTS,
        }),
        None => Err(Error::Capacity {
            requested: usize::MAX,
            max: MAX_MATRIX_ELEMENTS,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_ceiling() {
        assert!(check_vector_len(MAX_VECTOR_LEN).is_ok());
        assert_eq!(
            check_vector_len(MAX_VECTOR_LEN + 1),
            Err(Error::Capacity {
                requested: MAX_VECTOR_LEN + 1,
                max: MAX_VECTOR_LEN
            })
        );
    }

    #[test]
    fn matrix_ceiling() {
        assert_eq!(matrix_elements(3, 4), Ok(12));
        assert_eq!(matrix_elements(16_000, 16_000), Ok(MAX_MATRIX_ELEMENTS));
        assert!(matrix_elements(16_001, 16_000).is_err());
        assert!(matches!(
            matrix_elements(usize::MAX, 2),
            Err(Error::Capacity { requested: usize::MAX, .. })
        ));
    }

    #[test]
    fn threshold_casts() {
        assert_eq!(singularity_threshold::<f64>(), 1e-9);
        assert!((singularity_threshold::<f32>() - 1e-9_f32).abs() < 1e-15);
    }
}
