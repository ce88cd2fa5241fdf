//! Sentence splitting and field extraction
//!
//! All extraction here is heuristic string matching over transcripts. The
//! conversations are mixed German/English, which is why the timeline
//! pattern knows both "months" and "Monaten".

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Placeholder for fields with no extracted value
pub const NOT_SPECIFIED: &str = "Not specified";

/// A sentence ends at `.`, `!` or `?` followed by whitespace and a capital
/// letter. Abbreviations followed by lowercase ("approx. three") and
/// decimals ("3.5") do not split.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+[A-Z]").unwrap());

static BUDGET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"€[0-9,]+").unwrap());

static TIMELINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d+\s*(months?|Monate?n?)").unwrap());

/// Split text into sentences.
///
/// The boundary match is one punctuation byte, the whitespace gap, and one
/// capital: the sentence keeps the punctuation, the next sentence keeps
/// the capital, the gap is dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end() - 1;
    }
    sentences.push(&text[start..]);
    sentences
}

/// Context snippets for a list of keywords.
///
/// For each keyword in order, scan sentences in order and take the first
/// one containing a whole-word case-insensitive match, capturing from the
/// keyword to the next sentence-ending punctuation (or the end of the
/// sentence). Each keyword yields at most one snippet. Snippets are
/// joined with "; "; the placeholder is returned when nothing matched.
pub fn extract_keyword_contexts(text: &str, keywords: &[String]) -> String {
    let sentences = split_sentences(text);
    let mut snippets: Vec<String> = Vec::new();

    for keyword in keywords {
        let escaped = regex::escape(keyword);
        let word_re = match RegexBuilder::new(&format!(r"\b{escaped}\b"))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re,
            Err(e) => {
                warn!("Skipping keyword '{}': {}", keyword, e);
                continue;
            }
        };
        let context_re = match RegexBuilder::new(&format!(r"({escaped}.*?)([.!?]|$)"))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re,
            Err(e) => {
                warn!("Skipping keyword '{}': {}", keyword, e);
                continue;
            }
        };

        for sentence in &sentences {
            if word_re.is_match(sentence) {
                if let Some(caps) = context_re.captures(sentence) {
                    if let Some(snippet) = caps.get(1) {
                        snippets.push(snippet.as_str().trim().to_string());
                    }
                }
                break;
            }
        }
    }

    if snippets.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        snippets.join("; ")
    }
}

/// First euro amount in the text, or the placeholder.
pub fn extract_budget(text: &str) -> String {
    BUDGET_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// First "<number> months" phrase in the text (English or German), or the
/// placeholder.
pub fn extract_timeline(text: &str) -> String {
    TIMELINE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}
