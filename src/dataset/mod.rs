//! In-memory tabular datasets.
//!
//! A dataset is read fully from a delimited text file before any
//! analysis runs. Records are keyed by the header row.

pub mod reader;

pub use reader::*;

use crate::error::{AnalysisError, AnalysisResult};
use std::sync::Arc;

/// One row of input keyed by column name.
#[derive(Debug, Clone)]
pub struct Record {
    headers: Arc<[String]>,
    values: Vec<String>,
    row: usize,
}

impl Record {
    /// Create a record from a shared header row and its values.
    pub fn new(headers: Arc<[String]>, values: Vec<String>, row: usize) -> Self {
        Self {
            headers,
            values,
            row,
        }
    }

    /// 1-based position of this record among the data rows.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Look up a field value by name.
    ///
    /// Fails with `MissingField` when the header does not name the field
    /// or the row is too short to carry it.
    pub fn field(&self, name: &str) -> AnalysisResult<&str> {
        self.headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
            .ok_or_else(|| AnalysisError::MissingField {
                field: name.to_string(),
                row: self.row,
            })
    }

    /// Look up a field and parse it as a decimal number.
    pub fn number(&self, name: &str) -> AnalysisResult<f64> {
        let raw = self.field(name)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| AnalysisError::InvalidNumericFormat {
                field: name.to_string(),
                value: raw.to_string(),
                row: self.row,
            })
    }
}

/// The full ordered collection of records read from one input file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset from a header row and raw value rows.
    pub fn from_rows<H, R, V>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = V>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let shared: Arc<[String]> = headers.clone().into();
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                Record::new(
                    Arc::clone(&shared),
                    row.into_iter().map(Into::into).collect(),
                    i + 1,
                )
            })
            .collect();

        Self { headers, records }
    }

    /// Column names from the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
