//! fmax - extreme-value log-density evaluation
//!
//! Evaluates `logp`, `logcdf` and `logsf` of a configured or inline
//! distribution and validates model files.

use clap::{Args, Parser, Subcommand};
use fmax_cli::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use fmax_cli::report::{family_entries, CheckReport, EvalReport};
use fmax_cli::{CliError, ExitCode, Result};
use fmax_config::{resolve_config, validate_model, ConfigSource, DistributionSpec, ModelConfig};
use fmax_math::{ExtremeValue, Family};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Evaluate extreme-value distributions in the log domain
#[derive(Parser, Debug)]
#[command(name = "fmax")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Model config file (TOML or JSON)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log format on stderr (human or jsonl)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate logp, logcdf and logsf at the given points
    Eval(EvalArgs),

    /// Validate a model config and list its distributions
    Check,

    /// List supported families and their parameters
    Families,
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Distribution name from the model config
    #[arg(long, conflicts_with = "family")]
    name: Option<String>,

    /// Inline family (min_gumbel, max_weibull, frechet)
    #[arg(long)]
    family: Option<Family>,

    /// Inline parameter as key=value (repeatable)
    #[arg(long = "param", short = 'p', value_parser = parse_param, requires = "family")]
    params: Vec<(String, f64)>,

    /// Point to evaluate (repeatable; accepts inf, -inf, nan)
    #[arg(
        short = 'x',
        long = "x",
        required = true,
        allow_hyphen_values = true,
        value_parser = parse_point
    )]
    points: Vec<f64>,
}

fn parse_param(raw: &str) -> std::result::Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("parameter {}: {}", key.trim(), e))?;
    Ok((key.trim().to_string(), value))
}

fn parse_point(raw: &str) -> std::result::Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid point '{}': {}", raw, e))
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Ok
            };
            let _ = err.print();
            std::process::exit(code.as_i32());
        }
    };

    let log_config = LogConfig::from_env(
        LogLevel::from_verbosity(cli.global.verbose, cli.global.quiet),
        cli.global.log_format,
    );
    init_logging(&log_config);

    let result = match &cli.command {
        Commands::Eval(args) => run_eval(&cli.global, args),
        Commands::Check => run_check(&cli.global),
        Commands::Families => write_json(&family_entries()),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::Ok,
        Err(err) => output_error(&err),
    };
    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Commands
// ============================================================================

fn run_eval(global: &GlobalOpts, args: &EvalArgs) -> Result<()> {
    let (name, dist) = select_distribution(global, args)?;
    tracing::debug!(
        name = ?name,
        family = %dist.family(),
        points = args.points.len(),
        "evaluating"
    );
    write_json(&EvalReport::evaluate(name, dist, &args.points))
}

fn run_check(global: &GlobalOpts) -> Result<()> {
    let (model, path, source) = load_model(global.config.as_deref())?;
    let report = CheckReport::new(&model, &path, &source)?;
    write_json(&report)
}

fn select_distribution(
    global: &GlobalOpts,
    args: &EvalArgs,
) -> Result<(Option<String>, ExtremeValue)> {
    if let Some(family) = args.family {
        let dist = DistributionSpec::inline(family, &args.params)
            .and_then(|spec| spec.build())
            .map_err(|e| CliError::Args(e.to_string()))?;
        return Ok((None, dist));
    }

    let (model, _, _) = load_model(global.config.as_deref())?;
    let name = match (&args.name, model.distributions.as_slice()) {
        (Some(name), _) => name.clone(),
        (None, [only]) => only.name.clone(),
        (None, specs) => {
            return Err(CliError::Args(format!(
                "--name or --family is required; the model defines {} distributions ({})",
                specs.len(),
                model.names().join(", ")
            )))
        }
    };
    let dist = model.distribution(&name)?;
    Ok((Some(name), dist))
}

fn load_model(explicit: Option<&Path>) -> Result<(ModelConfig, PathBuf, ConfigSource)> {
    let paths = resolve_config(explicit);
    let path = paths.model.ok_or(CliError::NoConfig)?;
    let model = ModelConfig::from_file(&path)?;
    validate_model(&model)?;
    tracing::debug!(
        path = %path.display(),
        source = %paths.source,
        distributions = model.distributions.len(),
        "model config validated"
    );
    Ok((model, path, paths.source))
}

// ============================================================================
// Output
// ============================================================================

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn output_error(err: &CliError) -> ExitCode {
    let exit_code = err.exit_code();
    tracing::debug!(code = %exit_code, error = %err, "command failed");
    match serde_json::to_string_pretty(&err.to_json()) {
        Ok(body) => eprintln!("{}", body),
        Err(_) => eprintln!("error: {}", err),
    }
    exit_code
}
