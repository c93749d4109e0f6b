//! Delimited text reader.
//!
//! Reads a header row followed by data rows into a [`Dataset`]. The whole
//! file is materialised before returning.

use super::Dataset;
use crate::error::{AnalysisError, AnalysisResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Options controlling how delimited text is split into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Trim leading and trailing whitespace from every field.
    pub trim: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

impl From<&crate::config::ReaderConfig> for ReaderOptions {
    fn from(config: &crate::config::ReaderConfig) -> Self {
        Self {
            delimiter: config.delimiter_byte(),
            trim: config.trim,
        }
    }
}

/// Read a delimited text file into memory.
pub fn read_dataset(path: &Path, options: &ReaderOptions) -> AnalysisResult<Dataset> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_from(file, options).map_err(|source| AnalysisError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Read {} records with {} columns from {}",
        dataset.len(),
        dataset.headers().len(),
        path.display()
    );

    Ok(dataset)
}

/// Read delimited text from any reader.
pub fn read_from<R: Read>(source: R, options: &ReaderOptions) -> Result<Dataset, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(source);

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(String::from).collect::<Vec<_>>());
    }

    Ok(Dataset::from_rows(headers, rows))
}
