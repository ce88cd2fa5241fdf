/// Build a deterministic summary prompt for a client conversation transcript.
///
/// The summary lands in a single CSV cell, so the prompt asks for one plain
/// paragraph rather than structured Markdown.
pub fn build_conversation_summary_prompt(source: &str, transcript: &str) -> String {
    format!(
        "You are an assistant that summarizes client conversations about construction \
and interior design projects.\n\
Conversation: {source}\n\
\n\
Write one plain-text paragraph of 3 to 5 sentences describing what the client wants.\n\
\n\
Rules:\n\
- Use only information present in the transcript.\n\
- No headings, no bullet points, no quotes around the paragraph.\n\
- Mention concrete rooms, materials, and constraints when the client names them.\n\
\n\
Transcript:\n\
{transcript}"
    )
}
