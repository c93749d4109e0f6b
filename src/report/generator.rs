//! Report generation.
//!
//! Renders an analysis summary as a plain text summary, a Markdown
//! document, or JSON.

use crate::cli::OutputFormat;
use crate::models::{
    AnalysisSummary, BankSummary, EmployeeSummary, Gender, Report, ReportMetadata, SalesSummary,
};
use anyhow::Result;

/// Render a report in the requested format.
pub fn render_report(report: &Report, format: OutputFormat, pretty_json: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(generate_text_report(report)),
        OutputFormat::Markdown => Ok(generate_markdown_report(report)),
        OutputFormat::Json => generate_json_report(report, pretty_json),
    }
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Generate a short plain text report.
pub fn generate_text_report(report: &Report) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} analysis of {} ({} records)",
        report.metadata.analysis, report.metadata.input_path, report.metadata.record_count
    ));

    match &report.summary {
        AnalysisSummary::Employee(summary) => {
            lines.push(format!("Total employees: {}", summary.total_employees));
            for gender in Gender::ALL {
                lines.push(format!(
                    "  {}: {}",
                    gender,
                    summary.gender_count.get(gender)
                ));
            }
            lines.push(format!(
                "Most common job level: {}",
                summary.most_common_job_level
            ));
            lines.push("Highest problem-solving scores:".to_string());
            for entry in &summary.highest_scores {
                lines.push(format!("  {}: {:.2}", entry.gender, entry.score));
            }
        }
        AnalysisSummary::Sales(summary) => {
            lines.push("Sales per category:".to_string());
            for (category, count) in summary.product_sales.iter() {
                lines.push(format!("  {}: {}", category, count));
            }
            lines.push("Average sale per region:".to_string());
            for (region, average) in summary.region_sales.iter() {
                lines.push(format!("  {}: {:.2}", region, average));
            }
            lines.push(format!(
                "Highest sale: {:.2} ({})",
                summary.highest_sale_amount,
                summary.product_ids_with_max_sale.join(", ")
            ));
        }
        AnalysisSummary::Bank(summary) => {
            lines.push(format!("Only deposit: {}", list_or_none(&summary.only_deposit)));
            lines.push(format!(
                "Only withdrawal: {}",
                list_or_none(&summary.only_withdrawal)
            ));
            lines.push(format!("Both: {}", list_or_none(&summary.common)));
            lines.push(format!(
                "Exclusive descriptions: {}",
                summary.exclusive_count
            ));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("# Tabulyzer Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));

    match &report.summary {
        AnalysisSummary::Employee(summary) => output.push_str(&generate_employee_section(summary)),
        AnalysisSummary::Sales(summary) => output.push_str(&generate_sales_section(summary)),
        AnalysisSummary::Bank(summary) => output.push_str(&generate_bank_section(summary)),
    }

    output.push_str(&generate_footer());
    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Input:** `{}`\n", metadata.input_path));
    section.push_str(&format!("- **Analysis:** {}\n", metadata.analysis));
    section.push_str(&format!(
        "- **Analysis Date:** {}\n",
        metadata.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Records:** {}\n", metadata.record_count));
    section.push_str(&format!(
        "- **Duration:** {:.3}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

fn generate_employee_section(summary: &EmployeeSummary) -> String {
    let mut section = String::new();

    section.push_str("## Employees\n\n");
    section.push_str(&format!(
        "**Total employees:** {}\n\n",
        summary.total_employees
    ));

    section.push_str("### By Gender\n\n");
    section.push_str("| Gender | Count |\n");
    section.push_str("|:---|:---:|\n");
    for gender in Gender::ALL {
        section.push_str(&format!(
            "| {} | {} |\n",
            gender,
            summary.gender_count.get(gender)
        ));
    }
    section.push('\n');

    section.push_str(&format!(
        "**Most common job level:** {}\n\n",
        summary.most_common_job_level
    ));

    section.push_str("### Highest Problem-Solving Scores\n\n");
    section.push_str("| Rank | Gender | Score |\n");
    section.push_str("|:---:|:---|:---:|\n");
    for (i, entry) in summary.highest_scores.iter().enumerate() {
        section.push_str(&format!(
            "| {} | {} | {:.2} |\n",
            i + 1,
            entry.gender,
            entry.score
        ));
    }
    section.push('\n');

    section
}

fn generate_sales_section(summary: &SalesSummary) -> String {
    let mut section = String::new();

    section.push_str("## Sales\n\n");

    section.push_str("### Sales by Category\n\n");
    if summary.product_sales.is_empty() {
        section.push_str("No sales recorded.\n\n");
    } else {
        section.push_str("| Category | Sales |\n");
        section.push_str("|:---|:---:|\n");
        for (category, count) in summary.product_sales.iter() {
            section.push_str(&format!("| {} | {} |\n", category, count));
        }
        section.push('\n');
    }

    if !summary.region_sales.is_empty() {
        section.push_str("### Average Sale by Region\n\n");
        section.push_str("| Region | Average |\n");
        section.push_str("|:---|---:|\n");
        for (region, average) in summary.region_sales.iter() {
            section.push_str(&format!("| {} | {:.2} |\n", region, average));
        }
        section.push('\n');
    }

    section.push_str("### Highest Sale\n\n");
    section.push_str(&format!(
        "**Amount:** {:.2}\n\n",
        summary.highest_sale_amount
    ));
    for product_id in &summary.product_ids_with_max_sale {
        section.push_str(&format!("- `{}`\n", product_id));
    }
    if !summary.product_ids_with_max_sale.is_empty() {
        section.push('\n');
    }

    section
}

fn generate_bank_section(summary: &BankSummary) -> String {
    let mut section = String::new();

    section.push_str("## Transaction Descriptions\n\n");
    section.push_str(&format!(
        "**Exclusive descriptions:** {}\n\n",
        summary.exclusive_count
    ));

    for (title, items) in [
        ("Only Deposit", &summary.only_deposit),
        ("Only Withdrawal", &summary.only_withdrawal),
        ("Both", &summary.common),
    ] {
        section.push_str(&format!("### {} ({})\n\n", title, items.len()));
        if items.is_empty() {
            section.push_str("_None_\n\n");
            continue;
        }
        for item in items {
            section.push_str(&format!("- {}\n", item));
        }
        section.push('\n');
    }

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    format!(
        "---\n\n*Report generated by tabulyzer v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}
