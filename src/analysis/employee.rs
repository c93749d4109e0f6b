//! Employee demographics analysis.
//!
//! Counts employees per gender and job level and finds the best
//! problem-solving score for each gender.

use super::{load, round2};
use crate::dataset::Dataset;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{EmployeeSummary, FrequencyCounter, Gender, GenderCount, ScoreEntry};
use std::path::Path;
use tracing::{debug, info};

pub const GENDER: &str = "Gender";
pub const JOB_LEVEL: &str = "JobLevel";
pub const PROBLEM_SOLVING_SCORE: &str = "ProblemSolvingScore";

pub(crate) const EMPLOYEE_FIELDS: &[&str] = &[GENDER, JOB_LEVEL, PROBLEM_SOLVING_SCORE];

/// Read an employee file and summarize it.
pub fn analyze_employee_data(path: &Path) -> AnalysisResult<EmployeeSummary> {
    summarize_employees(&load(path)?)
}

/// Summarize employee records.
///
/// Fails on the first record with a missing field, a non-numeric score or a
/// gender other than `Male`/`Female`. An empty dataset has no most common job
/// level and fails with `EmptyDataset`.
pub fn summarize_employees(dataset: &Dataset) -> AnalysisResult<EmployeeSummary> {
    let mut gender_count = GenderCount::default();
    let mut job_levels = FrequencyCounter::new();
    let mut best = Gender::ALL.map(|gender| ScoreEntry { score: 0.0, gender });

    for record in dataset.records() {
        let label = record.field(GENDER)?;
        let job_level = record.field(JOB_LEVEL)?;
        let score = round2(record.number(PROBLEM_SOLVING_SCORE)?);

        let gender = Gender::from_label(label).ok_or_else(|| AnalysisError::MissingCategory {
            field: GENDER.to_string(),
            value: label.to_string(),
            row: record.row(),
        })?;

        gender_count.increment(gender);
        job_levels.increment(job_level);

        let slot = match gender {
            Gender::Female => &mut best[0],
            Gender::Male => &mut best[1],
        };
        // Equal scores keep the first record seen.
        if score > slot.score {
            slot.score = score;
        }
    }

    let most_common_job_level = job_levels
        .most_common()
        .ok_or(AnalysisError::EmptyDataset {
            analysis: "employee",
        })?
        .to_string();

    let mut highest_scores = best.to_vec();
    highest_scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.gender.as_str().cmp(b.gender.as_str()))
    });

    debug!("Job level distribution: {:?}", job_levels);
    info!(
        "Analyzed {} employees across {} job levels",
        dataset.len(),
        job_levels.len()
    );

    Ok(EmployeeSummary {
        total_employees: dataset.len(),
        gender_count,
        most_common_job_level,
        highest_scores,
    })
}
