use crate::linalg::invert;
use crate::traits::FloatScalar;
use crate::{Matrix, Vector};

use super::{check_len, EstimateError, LtiSystem};

/// Discrete linear Kalman filter for an [`LtiSystem`].
///
/// Each [`update`](Self::update) runs one predict/correct cycle:
///
/// ```text
/// x⁻ = F·x + B·u
/// P⁻ = F·P·Fᵀ + Q
/// K  = P⁻·Hᵀ·(H·P⁻·Hᵀ + R)⁻¹
/// x  = x⁻ + K·(z − H·x⁻)
/// P  = (I − K·H)·P⁻,  then symmetrized as (P + Pᵀ) / 2
/// ```
///
/// The system matrices are copied in at construction, so the filter does
/// not borrow the system it was built from.
#[derive(Debug, Clone)]
pub struct KalmanFilter<T> {
    f: Matrix<T>,
    b: Matrix<T>,
    q: Matrix<T>,
    h: Matrix<T>,
    r: Matrix<T>,
    identity: Matrix<T>,
    /// State estimate.
    x: Vector<T>,
    /// Error covariance.
    p: Matrix<T>,
    /// Gain from the most recent update.
    k: Matrix<T>,
}

impl<T: FloatScalar> KalmanFilter<T> {
    /// Filter starting from `x0 = 0`, `P0 = I`.
    pub fn new(sys: &LtiSystem<T>) -> Result<Self, EstimateError> {
        let n = sys.state_len();
        Self::with_initial_conditions(sys, Vector::zeros(n)?, Matrix::eye(n)?)
    }

    /// Filter starting from the given state and covariance.
    pub fn with_initial_conditions(
        sys: &LtiSystem<T>,
        x0: Vector<T>,
        p0: Matrix<T>,
    ) -> Result<Self, EstimateError> {
        let n = sys.state_len();
        let mut kf = Self {
            f: sys.state_transition().clone(),
            b: sys.control().clone(),
            q: sys.process_noise().clone(),
            h: sys.observation().clone(),
            r: sys.observation_noise().clone(),
            identity: Matrix::eye(n)?,
            x: Vector::empty(),
            p: Matrix::null(),
            k: Matrix::zeros(n, sys.output_len())?,
        };
        kf.set_initial_conditions(x0, p0)?;
        Ok(kf)
    }

    /// Replace the state estimate and covariance.
    pub fn set_initial_conditions(&mut self, x0: Vector<T>, p0: Matrix<T>) -> Result<(), EstimateError> {
        let n = self.f.rows();
        check_len("initial state", n, x0.len())?;
        if p0.size() != (n, n) {
            return Err(EstimateError::Model("initial covariance must be n x n"));
        }
        self.x = x0;
        self.p = p0;
        Ok(())
    }

    /// One predict/correct cycle with input `u` and measurement `z`.
    ///
    /// On error the filter state is left unchanged.
    pub fn update(&mut self, u: &Vector<T>, z: &Vector<T>) -> Result<(), EstimateError> {
        check_len("input", self.b.cols(), u.len())?;
        check_len("measurement", self.h.rows(), z.len())?;

        // Predict
        let x_pred = self
            .f
            .multiply_vector(&self.x)?
            .add(&self.b.multiply_vector(u)?)?;
        let ft = self.f.transpose();
        let p_pred = self.f.multiply(&self.p)?.multiply(&ft)?.add(&self.q)?;

        // Gain
        let ht = self.h.transpose();
        let pht = p_pred.multiply(&ht)?;
        let s = self.h.multiply(&pht)?.add(&self.r)?;
        let k = pht.multiply(&invert(&s)?)?;
        if k.iter().any(|&x| !x.is_finite()) {
            return Err(EstimateError::SingularInnovation);
        }

        // Correct
        let innovation = z.sub(&self.h.multiply_vector(&x_pred)?)?;
        let x = x_pred.add(&k.multiply_vector(&innovation)?)?;
        let p = self
            .identity
            .sub(&k.multiply(&self.h)?)?
            .multiply(&p_pred)?;
        let half = T::one() / (T::one() + T::one());
        let p = p.add(&p.transpose())?.scale(half)?;

        log::trace!("kalman update: innovation = {innovation:?}");
        self.x = x;
        self.p = p;
        self.k = k;
        Ok(())
    }

    /// Current state estimate.
    pub fn estimate(&self) -> &Vector<T> {
        &self.x
    }

    /// Current error covariance.
    pub fn covariance(&self) -> &Matrix<T> {
        &self.p
    }

    /// Per-state error variances, the diagonal of the covariance.
    pub fn covariance_diag(&self) -> Result<Vector<T>, EstimateError> {
        Ok(self.p.diag()?)
    }

    /// Gain used by the most recent update (zeros before the first).
    pub fn gain(&self) -> &Matrix<T> {
        &self.k
    }
}
