use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

/// A summarization backend for conversation transcripts.
///
/// `source` identifies the conversation (the transcript file stem) and is
/// only used to anchor the prompt; the summary is derived from
/// `transcript`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn summarize(&self, source: &str, transcript: &str) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ),
    }
}
