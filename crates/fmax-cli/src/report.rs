//! JSON reports printed on stdout.
//!
//! Non-finite numbers have no JSON encoding, so they are written as the
//! strings `"-inf"`, `"inf"` and `"nan"`.

use fmax_config::{ConfigSource, ModelConfig};
use fmax_math::{ExtremeValue, Family, LogDensity};
use serde::{Serialize, Serializer};
use std::path::Path;

/// Version of the report layout.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serialize a float, spelling out non-finite values.
pub fn serialize_extended_f64<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("nan")
    } else if *value > 0.0 {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

/// Log-density, log-CDF and log-survival at one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointReport {
    #[serde(serialize_with = "serialize_extended_f64")]
    pub x: f64,
    #[serde(serialize_with = "serialize_extended_f64")]
    pub logp: f64,
    #[serde(serialize_with = "serialize_extended_f64")]
    pub logcdf: f64,
    #[serde(serialize_with = "serialize_extended_f64")]
    pub logsf: f64,
}

/// Output of `fmax eval`.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub schema_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub distribution: ExtremeValue,
    pub points: Vec<PointReport>,
}

impl EvalReport {
    /// Evaluate `dist` at every point in `xs`.
    pub fn evaluate(name: Option<String>, dist: ExtremeValue, xs: &[f64]) -> Self {
        let logp = dist.logp_batch(xs);
        let logcdf = dist.logcdf_batch(xs);
        let points = xs
            .iter()
            .zip(logp.iter().zip(logcdf.iter()))
            .map(|(&x, (&logp, &logcdf))| PointReport {
                x,
                logp,
                logcdf,
                logsf: dist.logsf(x),
            })
            .collect();

        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            name,
            distribution: dist,
            points,
        }
    }
}

/// One family as listed by `fmax families`.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyEntry {
    pub family: Family,
    pub parameters: [&'static str; 2],
    pub support: &'static str,
}

impl From<Family> for FamilyEntry {
    fn from(family: Family) -> Self {
        Self {
            family,
            parameters: family.parameter_names(),
            support: family.support(),
        }
    }
}

/// Every supported family.
pub fn family_entries() -> Vec<FamilyEntry> {
    Family::ALL.iter().copied().map(FamilyEntry::from).collect()
}

/// One validated distribution as listed by `fmax check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckedDistribution {
    pub name: String,
    pub distribution: ExtremeValue,
    pub support: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Output of a successful `fmax check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub schema_version: &'static str,
    pub status: &'static str,
    pub path: String,
    pub source: String,
    pub config_schema_version: String,
    pub distributions: Vec<CheckedDistribution>,
}

impl CheckReport {
    /// Summarize an already validated model.
    pub fn new(model: &ModelConfig, path: &Path, source: &ConfigSource) -> fmax_config::ValidationResult<Self> {
        let distributions = model
            .distributions
            .iter()
            .map(|spec| {
                spec.build().map(|distribution| CheckedDistribution {
                    name: spec.name.clone(),
                    distribution,
                    support: spec.family.support(),
                    description: spec.description.clone(),
                })
            })
            .collect::<fmax_config::ValidationResult<Vec<_>>>()?;

        Ok(Self {
            schema_version: REPORT_SCHEMA_VERSION,
            status: "ok",
            path: path.display().to_string(),
            source: source.to_string(),
            config_schema_version: model.schema_version.clone(),
            distributions,
        })
    }
}
