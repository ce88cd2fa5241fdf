//! debrief - transcription server and report generator for client conversations
//!
//! Audio uploads come in over HTTP, transcripts go to disk, and a batch
//! command turns transcript folders into keyword-spotted CSV reports.

pub mod cli;
pub mod config;
pub mod llm;
pub mod report;
pub mod server;
pub mod storage;
pub mod transcription;

use thiserror::Error;

/// Main error type for debrief
#[derive(Error, Debug)]
pub enum DebriefError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidUpload(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DebriefError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "debrief";
