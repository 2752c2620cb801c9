//! Configuration validation errors and semantic validation.

use crate::model::{DistributionSpec, ModelConfig};
use fmax_math::{DistributionError, ExtremeValue, Family};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },

    #[error("Duplicate distribution name: {0}")]
    DuplicateName(String),

    #[error("Unknown distribution: {name} (available: {available})")]
    UnknownDistribution { name: String, available: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::MissingField(_) => 64,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
            ValidationError::DuplicateName(_) => 67,
            ValidationError::UnknownDistribution { .. } => 68,
        }
    }
}

/// Validate a model configuration semantically.
///
/// Every distribution must construct; names must be non-empty and unique.
pub fn validate_model(model: &ModelConfig) -> ValidationResult<()> {
    if model.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: model.schema_version.clone(),
        });
    }

    if model.distributions.is_empty() {
        return Err(ValidationError::SemanticError(
            "distributions must contain at least one entry".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for (idx, spec) in model.distributions.iter().enumerate() {
        if spec.name.trim().is_empty() {
            return Err(ValidationError::MissingField(format!(
                "distributions[{}].name",
                idx
            )));
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(ValidationError::DuplicateName(spec.name.clone()));
        }
        build_distribution(spec)?;
    }

    Ok(())
}

/// Construct the distribution a spec describes.
///
/// Parameters that do not belong to the family are rejected so a typo such
/// as `sigma` for `scale` cannot silently fall back to a missing field.
pub fn build_distribution(spec: &DistributionSpec) -> ValidationResult<ExtremeValue> {
    let field = |param: &str| format!("distributions.{}.{}", spec.name, param);
    let [first, second] = spec.family.parameter_names();

    for (param, value) in spec.parameter_slots() {
        if value.is_some() && param != first && param != second {
            return Err(ValidationError::InvalidValue {
                field: field(param),
                message: format!("not a parameter of {}", spec.family),
            });
        }
    }

    let require = |param: &str| -> ValidationResult<f64> {
        spec.parameter(param)
            .ok_or_else(|| ValidationError::MissingField(field(param)))
    };
    let a = require(first)?;
    let b = require(second)?;

    ExtremeValue::from_parameters(spec.family, a, b).map_err(|err| match err {
        DistributionError::InvalidParameter { name, value, reason, .. } => {
            ValidationError::InvalidValue {
                field: field(name),
                message: format!("{}, got {}", reason, value),
            }
        }
        other => ValidationError::SemanticError(other.to_string()),
    })
}

/// Check that a family name is known; used for CLI-provided strings.
pub fn parse_family(field: &str, raw: &str) -> ValidationResult<Family> {
    raw.parse().map_err(|message| ValidationError::InvalidValue {
        field: field.to_string(),
        message,
    })
}
