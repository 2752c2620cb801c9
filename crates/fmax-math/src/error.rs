//! Error types for distribution construction and batch evaluation.

use thiserror::Error;

/// Errors raised by distribution constructors and broadcasting helpers.
///
/// Evaluation itself never fails: out-of-support points yield `-inf`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A parameter lies outside its domain.
    #[error("invalid {distribution} parameter {name}={value}: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Distribution and observation slices cannot be broadcast together.
    #[error("cannot broadcast {distributions} distributions against {points} points")]
    ShapeMismatch { distributions: usize, points: usize },
}

/// Result type alias for distribution operations.
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Require a finite, strictly positive shape or scale parameter.
pub(crate) fn ensure_positive(
    distribution: &'static str,
    name: &'static str,
    value: f64,
) -> Result<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(DistributionError::InvalidParameter {
            distribution,
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(DistributionError::InvalidParameter {
            distribution,
            name,
            value,
            reason: "must be > 0",
        });
    }
    Ok(())
}

/// Require a finite location parameter.
pub(crate) fn ensure_finite(distribution: &'static str, name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }
    Err(DistributionError::InvalidParameter {
        distribution,
        name,
        value,
        reason: "must be finite",
    })
}
