//! Category keyword table

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One row of the keyword table: a report category and the keywords that
/// produce its context snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCategory {
    pub category: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct KeywordRecord {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Keywords")]
    keywords: String,
}

/// Load the Category/Keywords CSV table, preserving row order.
///
/// The Keywords cell is one ", "-separated string; a bare comma does not
/// split. A repeated category keeps its original position but takes the
/// later row's keywords.
pub fn load_keyword_table(path: &Path) -> Result<Vec<KeywordCategory>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open keyword table: {}", path.display()))?;

    let mut table: Vec<KeywordCategory> = Vec::new();
    for record in reader.deserialize() {
        let record: KeywordRecord = record
            .with_context(|| format!("Malformed keyword table row in {}", path.display()))?;
        let keywords: Vec<String> = record.keywords.split(", ").map(str::to_string).collect();

        match table.iter_mut().find(|c| c.category == record.category) {
            Some(existing) => existing.keywords = keywords,
            None => table.push(KeywordCategory {
                category: record.category,
                keywords,
            }),
        }
    }

    Ok(table)
}
