//! Batch report generation over a conversations directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::llm::LlmProvider;
use crate::report::builder::{build_report_row, write_report_csv};
use crate::report::keywords::KeywordCategory;

/// Generate one `report_<stem>.csv` per `.txt` file in `conversations_dir`.
///
/// Files are processed in name order and the first failure aborts the
/// batch; reports already written stay on disk. Returns the paths of the
/// reports written.
pub async fn generate_reports(
    conversations_dir: &Path,
    table: &[KeywordCategory],
    provider: &dyn LlmProvider,
    reports_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(reports_dir).with_context(|| {
        format!(
            "Failed to create reports directory: {}",
            reports_dir.display()
        )
    })?;

    let mut conversation_files: Vec<PathBuf> = fs::read_dir(conversations_dir)
        .with_context(|| {
            format!(
                "Failed to read conversations directory: {}",
                conversations_dir.display()
            )
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    conversation_files.sort();

    let mut written = Vec::new();
    for path in conversation_files {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read conversation: {}", path.display()))?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("conversation");

        info!("Summarizing {}", path.display());
        let summary = provider
            .summarize(stem, &text)
            .await
            .with_context(|| format!("Failed to summarize {}", path.display()))?;

        let row = build_report_row(&text, summary, table);
        let output = reports_dir.join(format!("report_{stem}.csv"));
        write_report_csv(&output, &row)?;
        info!("Report saved to {}", output.display());
        written.push(output);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedSummary(&'static str);

    #[async_trait]
    impl LlmProvider for FixedSummary {
        async fn summarize(&self, _source: &str, _transcript: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn summarize(&self, _source: &str, _transcript: &str) -> Result<String> {
            anyhow::bail!("summarizer unavailable")
        }
    }

    fn table() -> Vec<KeywordCategory> {
        vec![KeywordCategory {
            category: "Rooms".to_string(),
            keywords: vec!["kitchen".to_string()],
        }]
    }

    #[tokio::test]
    async fn writes_one_report_per_txt_file_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let conversations = dir.path().join("conversations");
        let reports = dir.path().join("reports");
        fs::create_dir(&conversations).unwrap();
        fs::write(conversations.join("b_client.txt"), "The kitchen is small.").unwrap();
        fs::write(conversations.join("a_client.txt"), "No rooms mentioned.").unwrap();

        let written = generate_reports(&conversations, &table(), &FixedSummary("S."), &reports)
            .await
            .unwrap();

        assert_eq!(
            written,
            vec![
                reports.join("report_a_client.csv"),
                reports.join("report_b_client.csv"),
            ]
        );
        let b_report = fs::read_to_string(reports.join("report_b_client.csv")).unwrap();
        assert!(b_report.contains("kitchen is small"));
    }

    #[tokio::test]
    async fn skips_non_txt_entries() {
        let dir = tempfile::tempdir().unwrap();
        let conversations = dir.path().join("conversations");
        let reports = dir.path().join("reports");
        fs::create_dir(&conversations).unwrap();
        fs::write(conversations.join("notes.md"), "ignored").unwrap();
        fs::write(conversations.join("audio.TXT"), "ignored, wrong case").unwrap();
        fs::create_dir(conversations.join("folder.txt")).unwrap();

        let written = generate_reports(&conversations, &table(), &FixedSummary("S."), &reports)
            .await
            .unwrap();

        assert!(written.is_empty());
        assert!(reports.exists());
    }

    #[tokio::test]
    async fn summarizer_failure_aborts_and_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let conversations = dir.path().join("conversations");
        let reports = dir.path().join("reports");
        fs::create_dir(&conversations).unwrap();
        fs::write(conversations.join("only.txt"), "text").unwrap();

        let err = generate_reports(&conversations, &table(), &FailingProvider, &reports)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("only.txt"));
    }

    #[tokio::test]
    async fn missing_conversations_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_reports(
            &dir.path().join("missing"),
            &table(),
            &FixedSummary("S."),
            &dir.path().join("reports"),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Failed to read conversations directory"));
    }
}
