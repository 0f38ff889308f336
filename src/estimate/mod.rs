//! State estimation on top of the dense kernel: a linear time-invariant
//! system model and a discrete Kalman filter that tracks it.
//!
//! Both are built only from the public [`Matrix`](crate::Matrix) /
//! [`Vector`](crate::Vector) API (products, transpose, [`invert`](crate::linalg::invert),
//! diagonal extraction) and run with runtime-sized state, input and
//! measurement dimensions.
//!
//! # Example
//!
//! ```
//! use dense_linalg::estimate::{KalmanFilter, LtiSystem};
//! use dense_linalg::{Matrix, Vector};
//!
//! // Constant-velocity model: state = [position, velocity], position measured.
//! let dt = 0.1;
//! let sys = LtiSystem::new(
//!     Matrix::from_rows(&[[1.0, dt], [0.0, 1.0]]).unwrap(),
//!     Matrix::from_rows(&[[0.0], [0.0]]).unwrap(),
//!     Matrix::from_rows(&[[1e-4, 0.0], [0.0, 1e-4]]).unwrap(),
//!     Matrix::from_rows(&[[1.0, 0.0]]).unwrap(),
//!     Matrix::from_rows(&[[0.01]]).unwrap(),
//!     dt,
//! ).unwrap();
//!
//! let mut kf = KalmanFilter::new(&sys).unwrap();
//! let u = Vector::from_slice(&[0.0]).unwrap();
//! for k in 1..=50 {
//!     let z = Vector::from_slice(&[0.5 * k as f64 * dt]).unwrap();
//!     kf.update(&u, &z).unwrap();
//! }
//! let x = kf.estimate();
//! assert!((x[1] - 0.5).abs() < 0.05);
//! ```

mod kalman;
mod lti;


pub use kalman::KalmanFilter;
pub use lti::LtiSystem;

use thiserror::Error;

use crate::error::Error;

/// Errors from system modelling and state estimation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Sampling period is zero, negative or not finite.
    #[error("sampling period must be positive and finite")]
    InvalidSamplingPeriod,

    /// System matrices have inconsistent shapes.
    #[error("invalid system model: {0}")]
    Model(&'static str),

    /// An input, measurement or initial condition has the wrong length.
    #[error("{what} has length {got}, expected {expected}")]
    Length {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// Innovation covariance `H·P·Hᵀ + R` is singular (cannot compute Kalman gain).
    #[error("innovation covariance is singular")]
    SingularInnovation,

    /// A kernel operation failed.
    #[error(transparent)]
    Linalg(#[from] Error),
}

pub(crate) fn check_len(what: &'static str, expected: usize, got: usize) -> Result<(), EstimateError> {
    if expected != got {
        return Err(EstimateError::Length {
            what,
            expected,
            got,
        });
    }
    Ok(())
}
