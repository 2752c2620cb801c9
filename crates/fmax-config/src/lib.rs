//! fmax model configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for model files (TOML or JSON)
//! - Config resolution (CLI → env → XDG → system)
//! - Semantic validation that constructs every configured distribution

pub mod model;
pub mod resolve;
pub mod validate;

pub use model::{ConfigFormat, DistributionSpec, ModelConfig};
pub use resolve::{resolve_config, ConfigPaths, ConfigSource};
pub use validate::{build_distribution, validate_model, ValidationError, ValidationResult};

/// Schema version for model files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
