//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.tabulyzer.toml` files.

use crate::cli::OutputFormat;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".tabulyzer.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Input reader settings.
    #[serde(default)]
    pub reader: ReaderConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Delimited text reader settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Single-character field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Trim whitespace around every field.
    #[serde(default)]
    pub trim: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            trim: false,
        }
    }
}

impl ReaderConfig {
    /// The delimiter as a byte. Only valid after [`Config::validate`].
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b','
        }
    }
}

fn default_delimiter() -> char {
    ','
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format when none is given on the command line.
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON reports.
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty_json: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if !self.reader.delimiter.is_ascii() || self.reader.delimiter == '"' {
            bail!(
                "Delimiter must be a single ASCII character other than '\"', got '{}'",
                self.reader.delimiter
            );
        }
        Ok(())
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(delimiter) = args.delimiter {
            self.reader.delimiter = delimiter;
        }
        if args.trim {
            self.reader.trim = true;
        }

        if let Some(format) = args.format {
            self.report.format = format;
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.reader.delimiter, ',');
        assert!(!config.reader.trim);
        assert_eq!(config.report.format, OutputFormat::Text);
        assert!(config.report.pretty_json);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[reader]
delimiter = ";"
trim = true

[report]
format = "json"
pretty_json = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.reader.delimiter, ';');
        assert_eq!(config.reader.delimiter_byte(), b';');
        assert!(config.reader.trim);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(!config.report.pretty_json);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[reader]\ntrim = true\n").unwrap();
        assert_eq!(config.reader.delimiter, ',');
        assert_eq!(config.report.format, OutputFormat::Text);
    }

    #[test]
    fn test_rejects_non_ascii_delimiter() {
        let config: Config = toml::from_str("[reader]\ndelimiter = \"§\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[reader]\ndelimiter = \"\\t\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.reader.delimiter_byte(), b'\t');
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config::default();
        let args = Args::parse_from(["tabulyzer", "data.csv", "-d", "|", "--format", "markdown"]);

        config.merge_with_args(&args);

        assert_eq!(config.reader.delimiter, '|');
        assert_eq!(config.report.format, OutputFormat::Markdown);
        assert!(!config.reader.trim);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[reader]"));
        assert!(toml_str.contains("[report]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.reader.delimiter, ',');
    }
}
