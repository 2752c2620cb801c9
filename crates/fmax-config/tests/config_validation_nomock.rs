//! No-mock configuration validation + resolution tests.
//!
//! Covers:
//! - Model validation against real TOML/JSON fixtures
//! - Resolution order (CLI > env path > env dir > XDG)

use fmax_config::resolve::{resolve_config, ConfigSource, ENV_CONFIG_DIR, ENV_MODEL_PATH};
use fmax_config::validate::{validate_model, ValidationError};
use fmax_config::ModelConfig;
use fmax_math::{Family, LogDensity};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tempfile::TempDir;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test")
        .join("fixtures")
        .join("config")
}

fn load_model_fixture(name: &str) -> ModelConfig {
    let path = fixtures_dir().join(name);
    ModelConfig::from_file(&path).expect("read model fixture")
}

struct EnvGuard {
    keys: Vec<String>,
    saved: Vec<Option<String>>,
}

impl EnvGuard {
    fn new(keys: &[&str]) -> Self {
        let mut saved = Vec::with_capacity(keys.len());
        for key in keys {
            saved.push(env::var(key).ok());
            env::remove_var(key);
        }
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            saved,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (idx, key) in self.keys.iter().enumerate() {
            match self.saved.get(idx).and_then(|v| v.as_ref()) {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }
}

fn with_env_lock<T>(f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .expect("env lock poisoned");
    f()
}

fn write_fixture(src_name: &str, dest: &Path) {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).expect("create fixture parent");
    }
    fs::copy(fixtures_dir().join(src_name), dest).expect("copy fixture");
}

const ENV_KEYS: [&str; 3] = [ENV_MODEL_PATH, ENV_CONFIG_DIR, "XDG_CONFIG_HOME"];

#[test]
fn test_validate_toml_fixture_ok() {
    let model = load_model_fixture("valid_model.toml");
    validate_model(&model).expect("valid model should pass validation");
    assert_eq!(model.distributions.len(), 3);

    let flood = model.distribution("annual_flood_peak").unwrap();
    assert_eq!(flood.family(), Family::Frechet);
    assert!((flood.logcdf(2.0) + 1.0).abs() < 1e-12);

    let low = model.distribution("annual_low_flow").unwrap();
    assert!((low.logp(0.0) + 1.0).abs() < 1e-12);

    let gust = model.distribution("gust_deficit").unwrap();
    assert!((gust.logcdf(-1.0) + 1.0).abs() < 1e-12);
}

#[test]
fn test_validate_json_fixture_ok() {
    let model = load_model_fixture("valid_model.json");
    validate_model(&model).expect("valid model should pass validation");
    assert_eq!(model.names(), vec!["annual_flood_peak", "annual_low_flow"]);
}

#[test]
fn test_validate_rejects_bad_scale() {
    let model = load_model_fixture("invalid_model_bad_scale.json");
    let err = validate_model(&model).expect_err("negative scale should fail validation");
    match err {
        ValidationError::InvalidValue { field, .. } => {
            assert_eq!(field, "distributions.annual_flood_peak.scale")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_validate_rejects_duplicate_names() {
    let model = load_model_fixture("invalid_model_duplicate.json");
    let err = validate_model(&model).expect_err("duplicate should fail validation");
    assert!(matches!(err, ValidationError::DuplicateName(ref n) if n == "peak"));
}

#[test]
fn test_validate_rejects_version_mismatch() {
    let model = load_model_fixture("invalid_model_version.json");
    let err = validate_model(&model).expect_err("old version should fail validation");
    assert_eq!(err.code(), 66);
}

#[test]
fn test_validate_rejects_empty_model() {
    let model = ModelConfig::from_json_str(r#"{"schema_version": "1.0.0"}"#).unwrap();
    let err = validate_model(&model).expect_err("empty model should fail validation");
    assert!(matches!(err, ValidationError::SemanticError(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ModelConfig::from_file(Path::new("/nonexistent/fmax.toml")).unwrap_err();
    assert!(matches!(err, ValidationError::IoError(_)));
    assert_eq!(err.code(), 60);
}

#[test]
fn test_resolve_config_cli_over_env() {
    with_env_lock(|| {
        let _guard = EnvGuard::new(&ENV_KEYS);
        let tmp = TempDir::new().unwrap();
        let cli = tmp.path().join("cli.toml");
        let from_env = tmp.path().join("env.json");
        write_fixture("valid_model.toml", &cli);
        write_fixture("valid_model.json", &from_env);
        env::set_var(ENV_MODEL_PATH, &from_env);

        let paths = resolve_config(Some(&cli));
        assert_eq!(paths.model.as_deref(), Some(cli.as_path()));
        assert_eq!(paths.source, ConfigSource::CliArgument);
    });
}

#[test]
fn test_resolve_config_env_path_over_env_dir() {
    with_env_lock(|| {
        let _guard = EnvGuard::new(&ENV_KEYS);
        let tmp = TempDir::new().unwrap();
        let from_env = tmp.path().join("model.json");
        let dir = tmp.path().join("dir");
        write_fixture("valid_model.json", &from_env);
        write_fixture("valid_model.toml", &dir.join("fmax.toml"));
        env::set_var(ENV_MODEL_PATH, &from_env);
        env::set_var(ENV_CONFIG_DIR, &dir);

        let paths = resolve_config(None);
        assert_eq!(paths.model.as_deref(), Some(from_env.as_path()));
        assert_eq!(paths.source, ConfigSource::Environment);
    });
}

#[test]
fn test_resolve_config_missing_cli_path_is_kept() {
    with_env_lock(|| {
        let _guard = EnvGuard::new(&ENV_KEYS);
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("dir");
        write_fixture("valid_model.json", &dir.join("fmax.json"));
        env::set_var(ENV_CONFIG_DIR, &dir);

        let missing = tmp.path().join("missing.toml");
        let paths = resolve_config(Some(&missing));
        assert_eq!(paths.model, Some(missing.clone()));
        assert_eq!(paths.source, ConfigSource::CliArgument);

        let err = ModelConfig::from_file(&missing).unwrap_err();
        assert!(matches!(err, ValidationError::IoError(_)));
    });
}

#[test]
fn test_resolve_config_xdg() {
    with_env_lock(|| {
        let _guard = EnvGuard::new(&ENV_KEYS);
        let tmp = TempDir::new().unwrap();
        let xdg = tmp.path().join("xdg");
        write_fixture("valid_model.toml", &xdg.join("fmax").join("fmax.toml"));
        env::set_var("XDG_CONFIG_HOME", &xdg);

        let paths = resolve_config(None);
        assert_eq!(paths.model, Some(xdg.join("fmax").join("fmax.toml")));
        assert_eq!(paths.source, ConfigSource::XdgConfig);

        let model = ModelConfig::from_file(paths.model.as_deref().unwrap()).unwrap();
        validate_model(&model).unwrap();
    });
}

#[test]
fn test_resolve_config_nothing_found() {
    with_env_lock(|| {
        let _guard = EnvGuard::new(&ENV_KEYS);
        let tmp = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", tmp.path());

        let paths = resolve_config(None);
        if Path::new("/etc/fmax").exists() {
            return;
        }
        assert!(paths.model.is_none());
        assert_eq!(paths.source, ConfigSource::BuiltinDefault);
    });
}
