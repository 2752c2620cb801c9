//! Gumbel distribution for block minima.
//!
//! The limiting law for the minimum of i.i.d. samples drawn from a
//! light-tailed parent.
//!
//! # Parameterization
//!
//! `MinGumbel(μ, β)` with location `μ ∈ ℝ` and scale `β > 0`. With
//! `y = (x - μ) / β`:
//!
//! ```text
//! log f(x) = y - exp(y) - log β
//! log F(x) = log(1 - exp(-exp(y)))
//! log S(x) = -exp(y)
//! ```

use super::distribution::LogDensity;
use super::scalar::Scalar;
use super::stable::log1mexp;
use crate::error::{ensure_finite, ensure_positive, Result};
use serde::Serialize;

/// Below this standardized value `log F` switches to `y - exp(y)/2`,
/// whose truncation error (`exp(2y)/24`) is under 1e-18.
const LOWER_TAIL_Y: f64 = -20.0;

/// Minimum-extreme Gumbel distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinGumbel<T = f64> {
    mu: T,
    beta: T,
}

impl<T: Scalar> MinGumbel<T> {
    /// Fails if `mu` is not finite or `beta` is not finite and positive.
    pub fn new(mu: T, beta: T) -> Result<Self> {
        ensure_finite("MinGumbel", "mu", mu.value())?;
        ensure_positive("MinGumbel", "beta", beta.value())?;
        Ok(Self { mu, beta })
    }

    /// Location parameter.
    pub fn mu(&self) -> T {
        self.mu
    }

    /// Scale parameter.
    pub fn beta(&self) -> T {
        self.beta
    }

    fn standardize(&self, x: T) -> T {
        (x - self.mu) / self.beta
    }
}

impl<T: Scalar> LogDensity<T> for MinGumbel<T> {
    fn logp(&self, x: T) -> T {
        let y = self.standardize(x);
        // y = +inf would give inf - inf.
        let upper_limit = y.value() == f64::INFINITY;
        let y_safe = T::select(upper_limit, T::from_f64(0.0), y);
        let logp = y_safe - y_safe.exp() - self.beta.ln();
        T::select(upper_limit, T::from_f64(f64::NEG_INFINITY), logp)
    }

    fn logcdf(&self, x: T) -> T {
        let y = self.standardize(x);
        let in_tail = y.value() < LOWER_TAIL_Y;

        let tail = y - y.exp() * T::from_f64(0.5);
        let y_body = T::select(in_tail, T::from_f64(LOWER_TAIL_Y), y);
        let body = log1mexp(y_body.exp());

        T::select(in_tail, tail, body)
    }

    fn logsf(&self, x: T) -> T {
        -self.standardize(x).exp()
    }
}
