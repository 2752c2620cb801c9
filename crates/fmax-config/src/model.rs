//! Distribution model configuration types.
//!
//! A model file names one or more distributions:
//!
//! ```toml
//! schema_version = "1.0.0"
//!
//! [[distributions]]
//! name = "flood_peaks"
//! family = "frechet"
//! alpha = 3.0
//! scale = 2.0
//! ```

use crate::validate::{build_distribution, ValidationError, ValidationResult};
use fmax_math::{ExtremeValue, Family};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every parameter name any family uses.
const PARAMETER_NAMES: [&str; 4] = ["mu", "beta", "alpha", "scale"];

/// Complete model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub distributions: Vec<DistributionSpec>,
}

/// One named distribution. Only the parameters of `family` may be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistributionSpec {
    pub name: String,
    pub family: Family,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl DistributionSpec {
    /// A spec with no parameters set.
    pub fn empty(name: impl Into<String>, family: Family) -> Self {
        Self {
            name: name.into(),
            family,
            description: None,
            mu: None,
            beta: None,
            alpha: None,
            scale: None,
        }
    }

    /// Build a spec from `key=value` style pairs (CLI input).
    pub fn inline(family: Family, pairs: &[(String, f64)]) -> ValidationResult<Self> {
        let mut spec = Self::empty("inline", family);
        for (key, value) in pairs {
            spec.set_parameter(key, *value)?;
        }
        Ok(spec)
    }

    /// Parameter value by name.
    pub fn parameter(&self, name: &str) -> Option<f64> {
        match name {
            "mu" => self.mu,
            "beta" => self.beta,
            "alpha" => self.alpha,
            "scale" => self.scale,
            _ => None,
        }
    }

    /// Set a parameter by name.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> ValidationResult<()> {
        let slot = match name {
            "mu" => &mut self.mu,
            "beta" => &mut self.beta,
            "alpha" => &mut self.alpha,
            "scale" => &mut self.scale,
            _ => {
                return Err(ValidationError::InvalidValue {
                    field: format!("distributions.{}.{}", self.name, name),
                    message: format!("unknown parameter (expected one of {})", PARAMETER_NAMES.join(", ")),
                })
            }
        };
        *slot = Some(value);
        Ok(())
    }

    /// All parameter slots, set or not.
    pub fn parameter_slots(&self) -> [(&'static str, Option<f64>); 4] {
        PARAMETER_NAMES.map(|name| (name, self.parameter(name)))
    }

    /// Validate and construct the distribution.
    pub fn build(&self) -> ValidationResult<ExtremeValue> {
        build_distribution(self)
    }
}

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

impl ModelConfig {
    /// Load a model config from a JSON or TOML file.
    pub fn from_file(path: &Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let model = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
            ConfigFormat::Json => Self::from_json_str(&content)?,
        };
        tracing::debug!(
            path = %path.display(),
            distributions = model.distributions.len(),
            "loaded model config"
        );
        Ok(model)
    }

    /// Parse a model config from a JSON string.
    pub fn from_json_str(json: &str) -> ValidationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Parse a model config from a TOML string.
    pub fn from_toml_str(text: &str) -> ValidationResult<Self> {
        toml::from_str(text).map_err(|e| ValidationError::ParseError(format!("Invalid TOML: {}", e)))
    }

    /// Look up a spec by name.
    pub fn get(&self, name: &str) -> Option<&DistributionSpec> {
        self.distributions.iter().find(|d| d.name == name)
    }

    /// Names in file order.
    pub fn names(&self) -> Vec<&str> {
        self.distributions.iter().map(|d| d.name.as_str()).collect()
    }

    /// Construct the named distribution.
    pub fn distribution(&self, name: &str) -> ValidationResult<ExtremeValue> {
        match self.get(name) {
            Some(spec) => spec.build(),
            None => Err(ValidationError::UnknownDistribution {
                name: name.to_string(),
                available: self.names().join(", "),
            }),
        }
    }
}
