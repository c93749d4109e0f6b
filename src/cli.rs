//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::analysis::AnalysisKind;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tabulyzer - batch analyses over delimited record files
///
/// Summarizes employee demographics, sales transactions or bank
/// transaction descriptions from a CSV file with a header row.
///
/// Examples:
///   tabulyzer employees.csv
///   tabulyzer sales.csv --kind sales --format json
///   tabulyzer transactions.csv --format markdown --output report.md
///   tabulyzer data.txt --delimiter ';' --trim
///   tabulyzer --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Delimited text file to analyze (first row is the header)
    #[arg(value_name = "INPUT", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Analysis to run
    ///
    /// `auto` picks the analysis whose required columns appear in the header.
    #[arg(short, long, default_value = "auto", value_name = "KIND")]
    pub kind: KindArg,

    /// Output format (text, markdown, json)
    ///
    /// Defaults to the config file setting, then `text`.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, value_name = "CHAR", env = "TABULYZER_DELIMITER")]
    pub delimiter: Option<char>,

    /// Trim whitespace around every field
    #[arg(long)]
    pub trim: bool,

    /// Path to configuration file
    ///
    /// If not specified, looks for .tabulyzer.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .tabulyzer.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Analysis selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum KindArg {
    /// Detect from the header row (default)
    #[default]
    Auto,
    Employee,
    Sales,
    Bank,
}

impl KindArg {
    /// The explicitly requested analysis, if any.
    pub fn explicit(&self) -> Option<AnalysisKind> {
        match self {
            KindArg::Auto => None,
            KindArg::Employee => Some(AnalysisKind::Employee),
            KindArg::Sales => Some(AnalysisKind::Sales),
            KindArg::Bank => Some(AnalysisKind::Bank),
        }
    }
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text summary (default)
    #[default]
    Text,
    /// Markdown document
    Markdown,
    /// JSON document
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() || delimiter == '"' {
                return Err(format!(
                    "Delimiter must be a single ASCII character other than '\"', got '{}'",
                    delimiter
                ));
            }
        }

        // Validate input file
        match self.input {
            None => return Err("An input file is required".to_string()),
            Some(ref path) => {
                if !path.exists() {
                    return Err(format!("Input file does not exist: {}", path.display()));
                }
                if !path.is_file() {
                    return Err(format!("Input path is not a file: {}", path.display()));
                }
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn make_args() -> Args {
        Args {
            input: None,
            kind: KindArg::Auto,
            format: None,
            output: None,
            delimiter: None,
            trim: false,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(["tabulyzer", "sales.csv"]);
        assert_eq!(args.input, Some(PathBuf::from("sales.csv")));
        assert_eq!(args.kind, KindArg::Auto);
        assert_eq!(args.format, None);
        assert!(!args.trim);
    }

    #[test]
    fn test_parse_kind_and_format() {
        let args = Args::parse_from(["tabulyzer", "x.csv", "--kind", "bank", "-f", "json"]);
        assert_eq!(args.kind.explicit(), Some(AnalysisKind::Bank));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(KindArg::Auto.explicit(), None);
    }

    #[test]
    fn test_input_required_without_init_config() {
        assert!(Args::try_parse_from(["tabulyzer"]).is_err());
        assert!(Args::try_parse_from(["tabulyzer", "--init-config"]).is_ok());
    }

    #[test]
    fn test_validation_missing_input_file() {
        let mut args = make_args();
        args.input = Some(PathBuf::from("/definitely/not/here.csv"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_existing_file() {
        let file = NamedTempFile::new().unwrap();
        let mut args = make_args();
        args.input = Some(file.path().to_path_buf());
        assert!(args.validate().is_ok());

        args.delimiter = Some('é');
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let file = NamedTempFile::new().unwrap();
        let mut args = make_args();
        args.input = Some(file.path().to_path_buf());
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
