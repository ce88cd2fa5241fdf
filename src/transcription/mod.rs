//! Transcription module for debrief
//!
//! Handles speech-to-text using whisper-rs.

mod audio;
mod model;
mod whisper;

pub use audio::{load_audio, pad_or_trim, CHUNK_SAMPLES, SAMPLE_RATE};
pub use model::{download_model, WhisperModel};
pub use whisper::WhisperTranscriber;
