//! Reversed Weibull distribution for block maxima with a bounded upper tail.
//!
//! # Parameterization
//!
//! `MaxWeibull(α, β)` with shape `α > 0` and scale `β > 0`, supported on
//! `x < 0`. With `t = -x / β`:
//!
//! ```text
//! log f(x) = log α + (α - 1) log t - t^α - log β     (x < 0)
//! log F(x) = -t^α                                    (x < 0)
//! ```
//!
//! For `x >= 0` the density is zero and the CDF is one.

use super::distribution::LogDensity;
use super::scalar::Scalar;
use super::stable::saturate;
use crate::error::{ensure_positive, Result};
use serde::Serialize;

/// Maximum-extreme (reversed) Weibull distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaxWeibull<T = f64> {
    alpha: T,
    beta: T,
}

impl<T: Scalar> MaxWeibull<T> {
    /// Fails unless both `alpha` and `beta` are finite and positive.
    pub fn new(alpha: T, beta: T) -> Result<Self> {
        ensure_positive("MaxWeibull", "alpha", alpha.value())?;
        ensure_positive("MaxWeibull", "beta", beta.value())?;
        Ok(Self { alpha, beta })
    }

    /// Shape parameter.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Scale parameter.
    pub fn beta(&self) -> T {
        self.beta
    }

    /// Distance below the upper endpoint, in scale units.
    fn depth(&self, x: T) -> T {
        -(x / self.beta)
    }
}

impl<T: Scalar> LogDensity<T> for MaxWeibull<T> {
    fn logp(&self, x: T) -> T {
        let t = self.depth(x);
        let inside = t.value() > 0.0 && t.value().is_finite();
        let one = T::from_f64(1.0);
        let t_safe = T::select(inside, t, one);

        let power = t_safe.pow(self.alpha);
        let logp = self.alpha.ln() + (self.alpha - one) * t_safe.ln() - power - self.beta.ln();
        // t^α overflows only where the density underflows to zero.
        let vanishes = power.value() == f64::INFINITY;
        T::select(inside && !vanishes, logp, saturate(t, f64::NEG_INFINITY))
    }

    fn logcdf(&self, x: T) -> T {
        let t = self.depth(x);
        let below_endpoint = t.value() > 0.0;
        let t_safe = T::select(below_endpoint, t, T::from_f64(1.0));

        let logcdf = -t_safe.pow(self.alpha);
        T::select(below_endpoint, logcdf, saturate(t, 0.0))
    }
}
