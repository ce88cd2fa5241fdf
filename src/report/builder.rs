//! Fixed-schema report rows

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::report::extract::{
    extract_budget, extract_keyword_contexts, extract_timeline, NOT_SPECIFIED,
};
use crate::report::keywords::KeywordCategory;

/// Placeholder for the free-form notes column
pub const DETAILS_NOT_SPECIFIED: &str = "Details not specified";

/// One report row. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Project Description")]
    pub project_description: String,
    #[serde(rename = "Rooms")]
    pub rooms: String,
    #[serde(rename = "Special Features")]
    pub special_features: String,
    #[serde(rename = "Design Style")]
    pub design_style: String,
    #[serde(rename = "Materials")]
    pub materials: String,
    #[serde(rename = "Budget")]
    pub budget: String,
    #[serde(rename = "Timeline")]
    pub timeline: String,
    #[serde(rename = "Additional Notes")]
    pub additional_notes: String,
}

/// Assemble the report row for one transcript: per-category context
/// snippets, the budget and timeline regex fields, and the model summary
/// as the description.
///
/// The four keyword columns are looked up in the table by name; a column
/// whose category is missing from the table gets the placeholder, and
/// table rows beyond those four have no effect on the output.
pub fn build_report_row(text: &str, summary: String, table: &[KeywordCategory]) -> ReportRow {
    let category_field = |name: &str| -> String {
        table
            .iter()
            .find(|c| c.category == name)
            .map(|c| extract_keyword_contexts(text, &c.keywords))
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    };

    ReportRow {
        project_description: summary,
        rooms: category_field("Rooms"),
        special_features: category_field("Special Features"),
        design_style: category_field("Design Style"),
        materials: category_field("Materials"),
        budget: extract_budget(text),
        timeline: extract_timeline(text),
        additional_notes: DETAILS_NOT_SPECIFIED.to_string(),
    }
}

/// Write a single-row report CSV with the fixed header.
pub fn write_report_csv(path: &Path, row: &ReportRow) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create report: {}", path.display()))?;
    writer
        .serialize(row)
        .with_context(|| format!("Failed to write report row: {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
