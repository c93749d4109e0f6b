//! Analysis modules.
//!
//! Each analysis consumes one [`Dataset`](crate::dataset::Dataset) and
//! returns a fixed-shape summary. Analyses share nothing but the reader.

pub mod bank;
pub mod employee;
pub mod sales;

pub use bank::*;
pub use employee::*;
pub use sales::*;

use crate::dataset::{read_dataset, Dataset, ReaderOptions};
use crate::error::AnalysisResult;
use crate::models::AnalysisSummary;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// The analyses this tool can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Employee,
    Sales,
    Bank,
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisKind::Employee => write!(f, "employee"),
            AnalysisKind::Sales => write!(f, "sales"),
            AnalysisKind::Bank => write!(f, "bank"),
        }
    }
}

impl AnalysisKind {
    /// Fields every record must carry for this analysis.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            AnalysisKind::Employee => EMPLOYEE_FIELDS,
            AnalysisKind::Sales => SALES_FIELDS,
            AnalysisKind::Bank => BANK_FIELDS,
        }
    }

    /// Pick the first analysis whose required fields all appear in `headers`.
    pub fn detect<S: AsRef<str>>(headers: &[S]) -> Option<Self> {
        [
            AnalysisKind::Employee,
            AnalysisKind::Sales,
            AnalysisKind::Bank,
        ]
        .into_iter()
        .find(|kind| {
            kind.required_fields()
                .iter()
                .all(|field| headers.iter().any(|h| h.as_ref() == *field))
        })
    }

    /// Run this analysis over an already loaded dataset.
    pub fn summarize(&self, dataset: &Dataset) -> AnalysisResult<AnalysisSummary> {
        Ok(match self {
            AnalysisKind::Employee => AnalysisSummary::Employee(summarize_employees(dataset)?),
            AnalysisKind::Sales => AnalysisSummary::Sales(summarize_sales(dataset)?),
            AnalysisKind::Bank => AnalysisSummary::Bank(summarize_bank_descriptions(dataset)?),
        })
    }
}

/// Round to two decimal places.
///
/// Rounds the exact binary value, the same way two-decimal formatting does,
/// so `2.675` (stored as 2.67499...) becomes `2.67`.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

fn load(path: &Path) -> AnalysisResult<Dataset> {
    read_dataset(path, &ReaderOptions::default())
}
