//! Tabulyzer - batch analyses over delimited record files
//!
//! A CLI tool that reads an employee, sales or bank transaction file
//! and prints a summary of its aggregates.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any error (invalid arguments, unreadable input, malformed records)

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::time::Instant;
use tabulyzer::analysis::AnalysisKind;
use tabulyzer::cli::Args;
use tabulyzer::config::{Config, CONFIG_FILE};
use tabulyzer::dataset::{read_dataset, ReaderOptions};
use tabulyzer::models::{Report, ReportMetadata};
use tabulyzer::report;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Load configuration before logging so the config can raise verbosity
    let (mut config, config_source) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    init_logging(&args, &config);

    debug!("tabulyzer v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    match config_source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    if let Err(e) = run(&args, &config) {
        error!("Analysis failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .tabulyzer.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE);

    if path.exists() {
        eprintln!("{} already exists. Remove it first or edit it manually.", CONFIG_FILE);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    println!("Created {} with default settings.", CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so reports printed to stdout stay clean.
fn init_logging(args: &Args, config: &Config) {
    let level = if config.general.verbose && !args.quiet {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a tracing subscriber was already installed");
    }
}

/// Read the input, run the analysis and emit the report.
fn run(args: &Args, config: &Config) -> Result<()> {
    let start_time = Instant::now();

    let input = args
        .input
        .as_deref()
        .context("An input file is required")?;

    let options = ReaderOptions::from(&config.reader);
    info!("Reading {}", input.display());
    let dataset = read_dataset(input, &options)?;

    let kind = match args.kind.explicit() {
        Some(kind) => kind,
        None => {
            let detected = AnalysisKind::detect(dataset.headers()).with_context(|| {
                format!(
                    "Could not detect the analysis from columns [{}]; pass --kind",
                    dataset.headers().join(", ")
                )
            })?;
            info!("Detected {} dataset", detected);
            detected
        }
    };

    let summary = kind
        .summarize(&dataset)
        .with_context(|| format!("{} analysis of {} failed", kind, input.display()))?;

    let report = Report {
        metadata: ReportMetadata {
            input_path: input.display().to_string(),
            analysis: kind.to_string(),
            analysis_date: Utc::now(),
            record_count: dataset.len(),
            duration_seconds: start_time.elapsed().as_secs_f64(),
        },
        summary,
    };

    let output = report::render_report(&report, config.report.format, config.report.pretty_json)?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Returns the path the configuration came from, if any.
fn load_config(args: &Args) -> Result<(Config, Option<PathBuf>)> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Ok((Config::load(config_path)?, Some(config_path.clone())));
    }

    // Try default location
    match Config::load_default()? {
        Some(config) => Ok((config, Some(PathBuf::from(CONFIG_FILE)))),
        None => Ok((Config::default(), None)),
    }
}
