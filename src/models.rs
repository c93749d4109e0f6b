//! Data models for the analyses.
//!
//! This module contains the fixed-shape summaries each analysis produces,
//! the ordered counters used to build them, and the report envelope.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Gender label accepted by the employee analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Both labels, in ascending label order.
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    /// Parse an exact label. Anything other than `Male` or `Female` is rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Head count for the two gender labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderCount {
    #[serde(rename = "Male")]
    pub male: usize,
    #[serde(rename = "Female")]
    pub female: usize,
}

impl GenderCount {
    pub fn increment(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }

    pub fn get(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }

    pub fn total(&self) -> usize {
        self.male + self.female
    }
}

/// Open-ended occurrence counter keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyCounter {
    counts: IndexMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `label`.
    pub fn increment(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    /// Occurrences of `label`, zero if never seen.
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// The label with the highest count. Ties go to the smallest label.
    pub fn most_common(&self) -> Option<&str> {
        self.counts
            .iter()
            .min_by(|(a_label, a_count), (b_label, b_count)| {
                b_count.cmp(a_count).then_with(|| a_label.cmp(b_label))
            })
            .map(|(label, _)| label.as_str())
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Best problem-solving score seen for one gender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub score: f64,
    pub gender: Gender,
}

/// Result of the employee analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub total_employees: usize,
    pub gender_count: GenderCount,
    pub most_common_job_level: String,
    /// Both genders, highest score first; Female first on equal scores.
    pub highest_scores: Vec<ScoreEntry>,
}

/// Result of the sales analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    /// Number of sales per product category, in first-seen order.
    pub product_sales: FrequencyCounter,
    /// Average sale amount per region, rounded to two decimals.
    pub region_sales: IndexMap<String, f64>,
    pub highest_sale_amount: f64,
    /// Product IDs that reached the highest amount, in input order.
    pub product_ids_with_max_sale: Vec<String>,
}

/// Result of the bank description analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankSummary {
    pub only_deposit: Vec<String>,
    pub common: Vec<String>,
    pub only_withdrawal: Vec<String>,
    /// Descriptions used by exactly one transaction type.
    pub exclusive_count: usize,
}

/// Summary produced by any of the analyses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisSummary {
    Employee(EmployeeSummary),
    Sales(SalesSummary),
    Bank(BankSummary),
}

/// Metadata about a generated report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Path of the analysed input file.
    pub input_path: String,
    /// Name of the analysis that ran.
    pub analysis: String,
    /// Date and time the report was produced.
    pub analysis_date: DateTime<Utc>,
    /// Number of records in the dataset.
    pub record_count: usize,
    /// Duration of read plus analysis in seconds.
    pub duration_seconds: f64,
}

/// A complete analysis report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub summary: AnalysisSummary,
}
