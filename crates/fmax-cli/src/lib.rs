//! fmax CLI library.
//!
//! - Exit codes for CLI operations
//! - Structured logging setup
//! - JSON report types
//!
//! The binary entry point is in `main.rs`.

pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod report;

pub use error::{CliError, Result};
pub use exit_codes::ExitCode;
