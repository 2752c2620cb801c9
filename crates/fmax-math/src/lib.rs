//! Extreme-value log-densities for gradient-based inference.
//!
//! Three families, each generic over [`Scalar`] so the same code evaluates
//! plain `f64` values and forward-mode [`Dual`] numbers:
//!
//! - [`MinGumbel`]: block minima of light-tailed parents
//! - [`MaxWeibull`]: block maxima with a bounded upper endpoint (support `x < 0`)
//! - [`Frechet`]: block maxima of heavy-tailed parents (support `x > 0`)
//!
//! ```
//! use fmax_math::{Frechet, LogDensity};
//!
//! let d = Frechet::new(3.0, 2.0).unwrap();
//! assert!((d.logcdf(2.0) + 1.0).abs() < 1e-12);
//! assert_eq!(d.logp(-1.0), f64::NEG_INFINITY);
//! ```

pub mod error;
pub mod math;

pub use error::{DistributionError, Result};
pub use math::distribution::{broadcast_logcdf, broadcast_logp, ExtremeValue, Family, LogDensity};
pub use math::dual::Dual;
pub use math::frechet::Frechet;
pub use math::gumbel::MinGumbel;
pub use math::scalar::Scalar;
pub use math::stable::{log1mexp, log_sub_exp};
pub use math::weibull::MaxWeibull;
