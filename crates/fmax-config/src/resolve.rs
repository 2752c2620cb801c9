//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI argument → environment variables → XDG paths → system → none.

use std::path::{Path, PathBuf};

/// Discovered model configuration path.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Path to the model file (or None if not found).
    pub model: Option<PathBuf>,

    /// Source of the model config (for diagnostics).
    pub source: ConfigSource,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/fmax/.
    SystemConfig,

    /// Nothing found.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
pub const ENV_MODEL_PATH: &str = "FMAX_CONFIG";
pub const ENV_CONFIG_DIR: &str = "FMAX_CONFIG_DIR";

/// Standard config file names, in lookup order.
const MODEL_FILENAMES: [&str; 2] = ["fmax.toml", "fmax.json"];

/// Application name for XDG directories.
const APP_NAME: &str = "fmax";

/// Resolve the model configuration path.
///
/// 1. Explicit CLI path (returned as given, existing or not)
/// 2. `FMAX_CONFIG` (direct path)
/// 3. `FMAX_CONFIG_DIR` + `fmax.toml` / `fmax.json`
/// 4. XDG config directory (~/.config/fmax/)
/// 5. System config (/etc/fmax/)
/// 6. None
pub fn resolve_config(cli_model: Option<&Path>) -> ConfigPaths {
    let mut paths = ConfigPaths::default();
    paths.model = resolve_model(cli_model, &mut paths.source);
    tracing::debug!(
        source = %paths.source,
        path = ?paths.model,
        "resolved model config"
    );
    paths
}

fn resolve_model(cli_path: Option<&Path>, source: &mut ConfigSource) -> Option<PathBuf> {
    // An explicit path is never second-guessed; a missing file surfaces when it is read.
    if let Some(path) = cli_path {
        *source = ConfigSource::CliArgument;
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(ENV_MODEL_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            *source = ConfigSource::Environment;
            return Some(path);
        }
        tracing::warn!(path = %path.display(), "{} points at a missing file", ENV_MODEL_PATH);
    }

    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        if let Some(path) = first_existing(&PathBuf::from(config_dir)) {
            *source = ConfigSource::Environment;
            return Some(path);
        }
    }

    if let Some(dir) = xdg_config_dir() {
        if let Some(path) = first_existing(&dir) {
            *source = ConfigSource::XdgConfig;
            return Some(path);
        }
    }

    if let Some(path) = first_existing(&system_config_dir()) {
        *source = ConfigSource::SystemConfig;
        return Some(path);
    }

    *source = ConfigSource::BuiltinDefault;
    None
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    MODEL_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Get the XDG config directory for fmax.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the system config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::CliArgument), "CLI argument");
        assert_eq!(
            format!("{}", ConfigSource::Environment),
            "environment variable"
        );
        assert_eq!(format!("{}", ConfigSource::XdgConfig), "XDG config");
        assert_eq!(format!("{}", ConfigSource::SystemConfig), "system config");
        assert_eq!(
            format!("{}", ConfigSource::BuiltinDefault),
            "builtin default"
        );
    }

    #[test]
    fn test_xdg_config_dir() {
        if let Some(path) = xdg_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_system_config_dir() {
        assert_eq!(system_config_dir(), PathBuf::from("/etc/fmax"));
    }

    #[test]
    fn test_first_existing_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fmax.json"), "{}").unwrap();
        assert_eq!(first_existing(dir.path()), Some(dir.path().join("fmax.json")));
        std::fs::write(dir.path().join("fmax.toml"), "").unwrap();
        assert_eq!(first_existing(dir.path()), Some(dir.path().join("fmax.toml")));
    }
}
