//! Bank transaction description analysis.
//!
//! Splits the unique transaction descriptions into those used only for
//! deposits, only for withdrawals, or for both. Any transaction type other
//! than the literal `Deposit` counts as a withdrawal.

use super::load;
use crate::dataset::Dataset;
use crate::error::AnalysisResult;
use crate::models::BankSummary;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

pub const TRANSACTION_DESCRIPTION: &str = "TransactionDescription";
pub const TRANSACTION_TYPE: &str = "TransactionType";

pub(crate) const BANK_FIELDS: &[&str] = &[TRANSACTION_DESCRIPTION, TRANSACTION_TYPE];

const DEPOSIT: &str = "Deposit";

/// Read a bank transaction file and summarize its descriptions.
pub fn analyze_bank_data(path: &Path) -> AnalysisResult<BankSummary> {
    summarize_bank_descriptions(&load(path)?)
}

/// Classify each unique description by the transaction types it appears with.
pub fn summarize_bank_descriptions(dataset: &Dataset) -> AnalysisResult<BankSummary> {
    let mut deposits: BTreeSet<&str> = BTreeSet::new();
    let mut withdrawals: BTreeSet<&str> = BTreeSet::new();

    for record in dataset.records() {
        let description = record.field(TRANSACTION_DESCRIPTION)?;
        if record.field(TRANSACTION_TYPE)? == DEPOSIT {
            deposits.insert(description);
        } else {
            withdrawals.insert(description);
        }
    }

    // BTreeSet iteration is ascending, so every list comes out sorted.
    let only_deposit: Vec<String> = deposits
        .difference(&withdrawals)
        .map(|s| s.to_string())
        .collect();
    let only_withdrawal: Vec<String> = withdrawals
        .difference(&deposits)
        .map(|s| s.to_string())
        .collect();
    let common: Vec<String> = deposits
        .intersection(&withdrawals)
        .map(|s| s.to_string())
        .collect();
    let exclusive_count = only_deposit.len() + only_withdrawal.len();

    info!(
        "Analyzed {} transactions: {} deposit-only, {} withdrawal-only, {} shared descriptions",
        dataset.len(),
        only_deposit.len(),
        only_withdrawal.len(),
        common.len()
    );

    Ok(BankSummary {
        only_deposit,
        common,
        only_withdrawal,
        exclusive_count,
    })
}
