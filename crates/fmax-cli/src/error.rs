//! CLI error type and its mapping onto exit codes.

use crate::exit_codes::ExitCode;
use fmax_config::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid arguments: {0}")]
    Args(String),

    #[error(transparent)]
    Config(#[from] ValidationError),

    #[error("no model config found (pass --config or set FMAX_CONFIG / FMAX_CONFIG_DIR)")]
    NoConfig,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Args(_) => ExitCode::ArgsError,
            CliError::Config(ValidationError::IoError(_)) => ExitCode::IoError,
            CliError::Config(_) | CliError::NoConfig => ExitCode::ConfigError,
            CliError::Io(_) => ExitCode::IoError,
            CliError::Serialize(_) => ExitCode::InternalError,
        }
    }

    /// Structured error body written to stderr.
    pub fn to_json(&self) -> serde_json::Value {
        let exit = self.exit_code();
        let mut error = serde_json::json!({
            "code": exit.code_name(),
            "exit_code": exit.as_i32(),
            "message": self.to_string(),
        });
        if let CliError::Config(inner) = self {
            error["config_code"] = serde_json::json!(inner.code());
        }
        serde_json::json!({ "status": "error", "error": error })
    }
}
