use crate::traits::FloatScalar;
use crate::{Matrix, Vector};

use super::{check_len, EstimateError};

/// Discrete linear time-invariant system.
///
/// ```text
/// x[k+1] = F·x[k] + B·u[k]      (process noise covariance Q)
/// z[k]   = H·x[k]               (measurement noise covariance R)
/// ```
///
/// `F` is `n x n`, `B` is `n x m`, `Q` is `n x n`, `H` is `p x n` with
/// `p <= n`, `R` is `p x p`. The noise covariances are not used by
/// [`run_model`](Self::run_model); they describe the system to a
/// [`KalmanFilter`](super::KalmanFilter).
#[derive(Debug, Clone)]
pub struct LtiSystem<T> {
    f: Matrix<T>,
    b: Matrix<T>,
    q: Matrix<T>,
    h: Matrix<T>,
    r: Matrix<T>,
    dt: T,
    x: Vector<T>,
    z: Vector<T>,
    initialized: bool,
}

impl<T: FloatScalar> LtiSystem<T> {
    /// Validate and store the system matrices.
    pub fn new(
        f: Matrix<T>,
        b: Matrix<T>,
        q: Matrix<T>,
        h: Matrix<T>,
        r: Matrix<T>,
        dt: T,
    ) -> Result<Self, EstimateError> {
        if !(dt > T::zero() && dt.is_finite()) {
            return Err(EstimateError::InvalidSamplingPeriod);
        }
        if f.is_null() || !f.is_square() {
            return Err(EstimateError::Model("F must be square and non-empty"));
        }
        let n = f.rows();
        if b.rows() != n {
            return Err(EstimateError::Model("B must have as many rows as F"));
        }
        if !q.is_square() || q.rows() != n {
            return Err(EstimateError::Model("Q must be square and match F"));
        }
        if h.cols() != n || h.rows() > n {
            return Err(EstimateError::Model(
                "H must have as many columns as F and at most as many rows",
            ));
        }
        if !r.is_square() || r.rows() != h.rows() {
            return Err(EstimateError::Model("R must be square and match the rows of H"));
        }
        Ok(Self {
            f,
            b,
            q,
            h,
            r,
            dt,
            x: Vector::empty(),
            z: Vector::empty(),
            initialized: false,
        })
    }

    /// State dimension `n`.
    pub fn state_len(&self) -> usize {
        self.f.rows()
    }

    /// Input dimension `m`.
    pub fn input_len(&self) -> usize {
        self.b.cols()
    }

    /// Measurement dimension `p`.
    pub fn output_len(&self) -> usize {
        self.h.rows()
    }

    pub fn state_transition(&self) -> &Matrix<T> {
        &self.f
    }

    pub fn control(&self) -> &Matrix<T> {
        &self.b
    }

    pub fn process_noise(&self) -> &Matrix<T> {
        &self.q
    }

    pub fn observation(&self) -> &Matrix<T> {
        &self.h
    }

    pub fn observation_noise(&self) -> &Matrix<T> {
        &self.r
    }

    pub fn sampling_period(&self) -> T {
        self.dt
    }

    /// Reset the simulated state to `x0`.
    pub fn set_initial_conditions(&mut self, x0: &Vector<T>) -> Result<(), EstimateError> {
        check_len("initial state", self.state_len(), x0.len())?;
        self.x = x0.clone();
        self.initialized = true;
        Ok(())
    }

    /// Advance one step: `x = F·x + B·u`, `z = H·x`.
    ///
    /// `x0` seeds the state on the first call only.
    pub fn run_model(&mut self, x0: &Vector<T>, u: &Vector<T>) -> Result<(), EstimateError> {
        if !self.initialized {
            self.set_initial_conditions(x0)?;
        }
        check_len("input", self.input_len(), u.len())?;
        let drift = self.f.multiply_vector(&self.x)?;
        self.x = drift.add(&self.b.multiply_vector(u)?)?;
        self.z = self.h.multiply_vector(&self.x)?;
        Ok(())
    }

    /// Current simulated state (empty before the first step).
    pub fn state(&self) -> &Vector<T> {
        &self.x
    }

    /// Noise-free output of the last step.
    pub fn output(&self) -> &Vector<T> {
        &self.z
    }
}
