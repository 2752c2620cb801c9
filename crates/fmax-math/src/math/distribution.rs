//! The evaluation contract shared by every extreme-value distribution.
//!
//! Host code depends on [`LogDensity`] only. [`ExtremeValue`] is the
//! tagged variant over the concrete families for callers that pick the
//! family at runtime (configuration files, the CLI).

use super::frechet::Frechet;
use super::gumbel::MinGumbel;
use super::scalar::Scalar;
use super::stable::{log1mexp, log_sub_exp};
use super::weibull::MaxWeibull;
use crate::error::{DistributionError, Result};
use serde::{Deserialize, Serialize};

/// Log-density / log-CDF provider.
///
/// `logp` and `logcdf` never panic and never fail: points outside the
/// support give `-inf` log-density and a saturated log-CDF.
pub trait LogDensity<T: Scalar = f64> {
    /// Log of the probability density at `x`.
    fn logp(&self, x: T) -> T;

    /// Log of `P(X <= x)`.
    fn logcdf(&self, x: T) -> T;

    /// Log of `P(X > x)`.
    fn logsf(&self, x: T) -> T {
        log1mexp(-self.logcdf(x))
    }

    /// Log of `P(lower < X <= upper)`; `-inf` for an empty interval.
    fn log_interval_prob(&self, lower: T, upper: T) -> T {
        let mass = log_sub_exp(self.logcdf(upper), self.logcdf(lower));
        T::select(
            upper.value() > lower.value(),
            mass,
            T::from_f64(f64::NEG_INFINITY),
        )
    }

    /// Element-wise `logp`.
    fn logp_batch(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.logp(x)).collect()
    }

    /// Element-wise `logcdf`.
    fn logcdf_batch(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.logcdf(x)).collect()
    }

    /// Sum of `logp` over independent observations.
    fn log_likelihood(&self, xs: &[T]) -> T {
        xs.iter().map(|&x| self.logp(x)).sum()
    }
}

/// Supported distribution families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Gumbel law for block minima.
    MinGumbel,
    /// Reversed Weibull law for block maxima, support `x < 0`.
    MaxWeibull,
    /// Fréchet law for heavy-tailed block maxima, support `x > 0`.
    Frechet,
}

impl Family {
    /// Every family, in a stable order.
    pub const ALL: [Family; 3] = [Family::MinGumbel, Family::MaxWeibull, Family::Frechet];

    /// Parameter names in constructor order.
    pub fn parameter_names(self) -> [&'static str; 2] {
        match self {
            Family::MinGumbel => ["mu", "beta"],
            Family::MaxWeibull => ["alpha", "beta"],
            Family::Frechet => ["alpha", "scale"],
        }
    }

    /// Human-readable support description.
    pub fn support(self) -> &'static str {
        match self {
            Family::MinGumbel => "x in (-inf, inf)",
            Family::MaxWeibull => "x < 0",
            Family::Frechet => "x > 0",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::MinGumbel => write!(f, "min_gumbel"),
            Family::MaxWeibull => write!(f, "max_weibull"),
            Family::Frechet => write!(f, "frechet"),
        }
    }
}

impl std::str::FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "min_gumbel" | "gumbel_min" => Ok(Family::MinGumbel),
            "max_weibull" | "weibull_max" => Ok(Family::MaxWeibull),
            "frechet" => Ok(Family::Frechet),
            _ => Err(format!("unknown distribution family: {}", s)),
        }
    }
}

/// A distribution whose family is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ExtremeValue<T = f64> {
    MinGumbel(MinGumbel<T>),
    MaxWeibull(MaxWeibull<T>),
    Frechet(Frechet<T>),
}

impl<T: Scalar> ExtremeValue<T> {
    /// Construct from a family and its two parameters in constructor order.
    pub fn from_parameters(family: Family, first: T, second: T) -> Result<Self> {
        Ok(match family {
            Family::MinGumbel => ExtremeValue::MinGumbel(MinGumbel::new(first, second)?),
            Family::MaxWeibull => ExtremeValue::MaxWeibull(MaxWeibull::new(first, second)?),
            Family::Frechet => ExtremeValue::Frechet(Frechet::new(first, second)?),
        })
    }

    /// Which family this distribution belongs to.
    pub fn family(&self) -> Family {
        match self {
            ExtremeValue::MinGumbel(_) => Family::MinGumbel,
            ExtremeValue::MaxWeibull(_) => Family::MaxWeibull,
            ExtremeValue::Frechet(_) => Family::Frechet,
        }
    }

    /// Parameter values in constructor order.
    pub fn parameters(&self) -> [T; 2] {
        match self {
            ExtremeValue::MinGumbel(d) => [d.mu(), d.beta()],
            ExtremeValue::MaxWeibull(d) => [d.alpha(), d.beta()],
            ExtremeValue::Frechet(d) => [d.alpha(), d.scale()],
        }
    }
}

impl<T: Scalar> LogDensity<T> for ExtremeValue<T> {
    fn logp(&self, x: T) -> T {
        match self {
            ExtremeValue::MinGumbel(d) => d.logp(x),
            ExtremeValue::MaxWeibull(d) => d.logp(x),
            ExtremeValue::Frechet(d) => d.logp(x),
        }
    }

    fn logcdf(&self, x: T) -> T {
        match self {
            ExtremeValue::MinGumbel(d) => d.logcdf(x),
            ExtremeValue::MaxWeibull(d) => d.logcdf(x),
            ExtremeValue::Frechet(d) => d.logcdf(x),
        }
    }

    fn logsf(&self, x: T) -> T {
        match self {
            ExtremeValue::MinGumbel(d) => d.logsf(x),
            ExtremeValue::MaxWeibull(d) => d.logsf(x),
            ExtremeValue::Frechet(d) => d.logsf(x),
        }
    }
}

impl<T> From<MinGumbel<T>> for ExtremeValue<T> {
    fn from(d: MinGumbel<T>) -> Self {
        ExtremeValue::MinGumbel(d)
    }
}

impl<T> From<MaxWeibull<T>> for ExtremeValue<T> {
    fn from(d: MaxWeibull<T>) -> Self {
        ExtremeValue::MaxWeibull(d)
    }
}

impl<T> From<Frechet<T>> for ExtremeValue<T> {
    fn from(d: Frechet<T>) -> Self {
        ExtremeValue::Frechet(d)
    }
}

/// Broadcast length for a pair of 1-D shapes (length 1 stretches).
fn broadcast_len(distributions: usize, points: usize) -> Result<usize> {
    match (distributions, points) {
        (d, p) if d == p => Ok(d),
        (1, p) => Ok(p),
        (d, 1) => Ok(d),
        (d, p) => Err(DistributionError::ShapeMismatch {
            distributions: d,
            points: p,
        }),
    }
}

fn broadcast_with<T, D, F>(dists: &[D], xs: &[T], eval: F) -> Result<Vec<T>>
where
    T: Scalar,
    F: Fn(&D, T) -> T,
{
    let n = broadcast_len(dists.len(), xs.len())?;
    Ok((0..n)
        .map(|i| {
            let d = &dists[if dists.len() == 1 { 0 } else { i }];
            let x = xs[if xs.len() == 1 { 0 } else { i }];
            eval(d, x)
        })
        .collect())
}

/// `logp` over paired distributions and points with length-1 broadcasting.
pub fn broadcast_logp<T: Scalar, D: LogDensity<T>>(dists: &[D], xs: &[T]) -> Result<Vec<T>> {
    broadcast_with(dists, xs, |d, x| d.logp(x))
}

/// `logcdf` over paired distributions and points with length-1 broadcasting.
pub fn broadcast_logcdf<T: Scalar, D: LogDensity<T>>(dists: &[D], xs: &[T]) -> Result<Vec<T>> {
    broadcast_with(dists, xs, |d, x| d.logcdf(x))
}
