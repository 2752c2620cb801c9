//! Fréchet distribution for heavy-tailed block maxima.
//!
//! # Parameterization
//!
//! `Frechet(α, s)` with shape `α > 0` and scale `s > 0`, supported on
//! `x > 0`. With `z = x / s`:
//!
//! ```text
//! log f(x) = log α - log s - (α + 1) log z - z^(-α)   (x > 0)
//! log F(x) = -z^(-α)                                  (x > 0)
//! ```
//!
//! For `x <= 0` the density and the CDF are both zero. The guard is a
//! select over a branch evaluated at `z = 1`, so no `log(0)` or `0^(-α)`
//! is ever formed.

use super::distribution::LogDensity;
use super::scalar::Scalar;
use super::stable::saturate;
use crate::error::{ensure_positive, Result};
use serde::Serialize;

/// Fréchet distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frechet<T = f64> {
    alpha: T,
    scale: T,
}

impl<T: Scalar> Frechet<T> {
    /// Fails unless both `alpha` and `scale` are finite and positive.
    pub fn new(alpha: T, scale: T) -> Result<Self> {
        ensure_positive("Frechet", "alpha", alpha.value())?;
        ensure_positive("Frechet", "scale", scale.value())?;
        Ok(Self { alpha, scale })
    }

    /// Shape parameter.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Scale parameter.
    pub fn scale(&self) -> T {
        self.scale
    }
}

impl<T: Scalar> LogDensity<T> for Frechet<T> {
    fn logp(&self, x: T) -> T {
        let z = x / self.scale;
        let inside = z.value() > 0.0 && z.value().is_finite();
        let one = T::from_f64(1.0);
        let z_safe = T::select(inside, z, one);

        let power = z_safe.pow(-self.alpha);
        let logp = self.alpha.ln() - self.scale.ln() - (self.alpha + one) * z_safe.ln() - power;
        // z^(-α) overflows only where the density underflows to zero.
        let vanishes = power.value() == f64::INFINITY;
        T::select(inside && !vanishes, logp, saturate(z, f64::NEG_INFINITY))
    }

    fn logcdf(&self, x: T) -> T {
        let z = x / self.scale;
        let positive = z.value() > 0.0;
        let z_safe = T::select(positive, z, T::from_f64(1.0));

        let logcdf = -z_safe.pow(-self.alpha);
        T::select(positive, logcdf, saturate(z, f64::NEG_INFINITY))
    }
}
