//! Batch analyses over delimited record files.
//!
//! Three independent analyses read a CSV file with a header row into memory
//! and return a fixed-shape summary:
//!
//! - [`analysis::analyze_employee_data`]: head counts, most common job level
//!   and best problem-solving score per gender.
//! - [`analysis::analyze_sales_data`]: sales per category, average sale per
//!   region and the products tied at the highest sale.
//! - [`analysis::analyze_bank_data`]: transaction descriptions used only for
//!   deposits, only for withdrawals, or for both.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod report;

pub use error::{AnalysisError, AnalysisResult};
