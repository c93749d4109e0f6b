//! Sales transaction analysis.

use super::{load, round2};
use crate::dataset::Dataset;
use crate::error::AnalysisResult;
use crate::models::{FrequencyCounter, SalesSummary};
use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, info};

pub const PRODUCT_CATEGORY: &str = "ProductCategory";
pub const SALES_REGION: &str = "SalesRegion";
pub const SALE_AMOUNT: &str = "SaleAmount";
pub const PRODUCT_ID: &str = "ProductID";

pub(crate) const SALES_FIELDS: &[&str] = &[PRODUCT_CATEGORY, SALES_REGION, SALE_AMOUNT, PRODUCT_ID];

/// Running sum and count for one region.
#[derive(Debug, Default, Clone, Copy)]
struct RegionTotal {
    sum: f64,
    count: usize,
}

/// Read a sales file and summarize it.
pub fn analyze_sales_data(path: &Path) -> AnalysisResult<SalesSummary> {
    summarize_sales(&load(path)?)
}

/// Summarize sales records.
///
/// The highest sale starts at `0.0`. A strictly greater amount resets the
/// list of product IDs; an exactly equal amount (no tolerance) joins it.
/// Amounts are compared unrounded.
pub fn summarize_sales(dataset: &Dataset) -> AnalysisResult<SalesSummary> {
    let mut product_sales = FrequencyCounter::new();
    let mut regions: IndexMap<String, RegionTotal> = IndexMap::new();
    let mut highest_sale_amount = 0.0_f64;
    let mut product_ids_with_max_sale: Vec<String> = Vec::new();

    for record in dataset.records() {
        let category = record.field(PRODUCT_CATEGORY)?;
        let region = record.field(SALES_REGION)?;
        let amount = record.number(SALE_AMOUNT)?;
        let product_id = record.field(PRODUCT_ID)?;

        product_sales.increment(category);

        let total = regions.entry(region.to_string()).or_default();
        total.sum += amount;
        total.count += 1;

        if amount > highest_sale_amount {
            highest_sale_amount = amount;
            product_ids_with_max_sale.clear();
            product_ids_with_max_sale.push(product_id.to_string());
        } else if amount == highest_sale_amount {
            product_ids_with_max_sale.push(product_id.to_string());
        }
    }

    let region_sales: IndexMap<String, f64> = regions
        .into_iter()
        .map(|(region, total)| (region, round2(total.sum / total.count as f64)))
        .collect();

    debug!(
        "Highest sale {} reached by {} product(s)",
        highest_sale_amount,
        product_ids_with_max_sale.len()
    );
    info!(
        "Analyzed {} sales across {} categories and {} regions",
        dataset.len(),
        product_sales.len(),
        region_sales.len()
    );

    Ok(SalesSummary {
        product_sales,
        region_sales,
        highest_sale_amount: round2(highest_sale_amount),
        product_ids_with_max_sale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sales(rows: &[[&str; 4]]) -> Dataset {
        Dataset::from_rows(SALES_FIELDS.iter().copied(), rows.iter().copied())
    }

    #[test]
    fn test_tie_list_in_encounter_order() {
        let dataset = sales(&[
            ["Toys", "North", "100.0", "P1"],
            ["Toys", "North", "150.0", "P2"],
            ["Books", "South", "150.0", "P3"],
            ["Books", "South", "90.0", "P4"],
        ]);

        let summary = summarize_sales(&dataset).unwrap();

        assert_eq!(summary.highest_sale_amount, 150.0);
        assert_eq!(summary.product_ids_with_max_sale, vec!["P2", "P3"]);
    }

    #[test]
    fn test_greater_amount_resets_ties() {
        let dataset = sales(&[
            ["Toys", "North", "50", "P1"],
            ["Toys", "North", "50", "P2"],
            ["Toys", "North", "75.556", "P3"],
        ]);

        let summary = summarize_sales(&dataset).unwrap();

        assert_eq!(summary.highest_sale_amount, 75.56);
        assert_eq!(summary.product_ids_with_max_sale, vec!["P3"]);
    }

    #[test]
    fn test_ties_use_unrounded_amounts() {
        let dataset = sales(&[
            ["Toys", "North", "99.999", "P1"],
            ["Toys", "North", "99.998", "P2"],
        ]);

        let summary = summarize_sales(&dataset).unwrap();

        assert_eq!(summary.highest_sale_amount, 100.0);
        assert_eq!(summary.product_ids_with_max_sale, vec!["P1"]);
    }

    #[test]
    fn test_category_counts_and_region_averages() {
        let dataset = sales(&[
            ["Toys", "North", "10", "P1"],
            ["Books", "South", "20", "P2"],
            ["Toys", "North", "15", "P3"],
            ["Toys", "North", "0.01", "P4"],
        ]);

        let summary = summarize_sales(&dataset).unwrap();

        let categories: Vec<_> = summary.product_sales.iter().collect();
        assert_eq!(categories, vec![("Toys", 3), ("Books", 1)]);

        let regions: Vec<_> = summary
            .region_sales
            .iter()
            .map(|(region, average)| (region.as_str(), *average))
            .collect();
        assert_eq!(regions, vec![("North", 8.34), ("South", 20.0)]);
    }

    #[test]
    fn test_region_average_independent_of_row_order() {
        let rows = [
            ["A", "West", "10.10", "P1"],
            ["A", "East", "3", "P2"],
            ["A", "West", "20.20", "P3"],
            ["A", "West", "33.33", "P4"],
        ];
        let mut reversed = rows;
        reversed.reverse();

        let forward = summarize_sales(&sales(&rows)).unwrap();
        let backward = summarize_sales(&sales(&reversed)).unwrap();

        assert_eq!(
            forward.region_sales.get("West"),
            backward.region_sales.get("West")
        );
        assert_eq!(forward.region_sales.get("West"), Some(&21.21));
    }

    #[test]
    fn test_repeat_runs_identical() {
        let dataset = sales(&[
            ["Toys", "West", "20.5", "P1"],
            ["Books", "East", "99.99", "P2"],
            ["Garden", "West", "99.99", "P3"],
            ["Toys", "North", "12", "P4"],
        ]);

        let first = summarize_sales(&dataset).unwrap();
        let second = summarize_sales(&dataset).unwrap();

        assert_eq!(first, second);
        let categories: Vec<_> = first.product_sales.iter().map(|(c, _)| c).collect();
        let regions: Vec<_> = first.region_sales.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["Toys", "Books", "Garden"]);
        assert_eq!(regions, vec!["West", "East", "North"]);
    }

    #[test]
    fn test_zero_amount_joins_initial_ties() {
        let dataset = sales(&[["Toys", "North", "0", "P1"], ["Toys", "North", "-4", "P2"]]);

        let summary = summarize_sales(&dataset).unwrap();

        assert_eq!(summary.highest_sale_amount, 0.0);
        assert_eq!(summary.product_ids_with_max_sale, vec!["P1"]);
    }

    #[test]
    fn test_empty_dataset() {
        let summary = summarize_sales(&sales(&[])).unwrap();

        assert!(summary.product_sales.is_empty());
        assert!(summary.region_sales.is_empty());
        assert_eq!(summary.highest_sale_amount, 0.0);
        assert!(summary.product_ids_with_max_sale.is_empty());
    }

    #[test]
    fn test_invalid_amount_aborts() {
        let dataset = sales(&[
            ["Toys", "North", "10", "P1"],
            ["Toys", "North", "ten", "P2"],
        ]);

        let err = summarize_sales(&dataset).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidNumericFormat { ref value, row: 2, .. } if value == "ten"
        ));
    }

    #[test]
    fn test_missing_product_id() {
        let dataset = Dataset::from_rows(
            [PRODUCT_CATEGORY, SALES_REGION, SALE_AMOUNT],
            [["Toys", "North", "10"]],
        );

        assert!(matches!(
            summarize_sales(&dataset),
            Err(AnalysisError::MissingField { ref field, .. }) if field == PRODUCT_ID
        ));
    }

    #[test]
    fn test_analyze_sales_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ProductID,ProductCategory,SalesRegion,SaleAmount").unwrap();
        writeln!(file, "A1,Electronics,East,199.99").unwrap();
        writeln!(file, "A2,Electronics,West,199.99").unwrap();
        writeln!(file, "A3,Clothing,East,50.01").unwrap();

        let summary = analyze_sales_data(file.path()).unwrap();

        assert_eq!(summary.product_sales.get("Electronics"), 2);
        assert_eq!(summary.region_sales.get("East"), Some(&125.0));
        assert_eq!(summary.highest_sale_amount, 199.99);
        assert_eq!(summary.product_ids_with_max_sale, vec!["A1", "A2"]);
    }
}
