//! Report module for debrief
//!
//! Turns a folder of conversation transcripts into keyword-spotted CSV
//! reports, one per transcript.

mod batch;
mod builder;
mod extract;
mod keywords;

pub use batch::generate_reports;
pub use builder::{build_report_row, write_report_csv, ReportRow, DETAILS_NOT_SPECIFIED};
pub use extract::{
    extract_budget, extract_keyword_contexts, extract_timeline, split_sentences, NOT_SPECIFIED,
};
pub use keywords::{load_keyword_table, KeywordCategory};
