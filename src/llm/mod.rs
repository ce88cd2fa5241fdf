//! LLM module for debrief
//!
//! Conversation summaries for report generation, via the Gemini API.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, LlmProvider};
pub use gemini::GeminiClient;
