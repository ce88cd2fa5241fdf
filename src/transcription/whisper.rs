//! Whisper transcription using whisper-rs

use anyhow::{Context, Result};
use std::path::Path;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::config::Settings;
use crate::transcription::audio::{load_audio, pad_or_trim, CHUNK_SAMPLES};

/// Whisper-based transcriber
pub struct WhisperTranscriber {
    ctx: WhisperContext,
    language: Option<String>,
    translate: bool,
    threads: u32,
}

impl std::fmt::Debug for WhisperTranscriber {
    // WhisperContext has no Debug impl, so derive is not possible
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperTranscriber")
            .field("language", &self.language)
            .field("translate", &self.translate)
            .field("threads", &self.threads)
            .finish_non_exhaustive()
    }
}

impl WhisperTranscriber {
    /// Create a new transcriber with the configured model
    pub fn new(settings: &Settings) -> Result<Self> {
        let model_path = settings.model_path();

        if !model_path.exists() {
            anyhow::bail!(
                "Whisper model not found at {}. Please download the model first.\n\
                 Run: debrief model download {}",
                model_path.display(),
                settings.whisper.model
            );
        }

        let ctx = WhisperContext::new_with_params(
            model_path.to_str().unwrap(),
            WhisperContextParameters::default(),
        )
        .context("Failed to load Whisper model")?;

        let language = if settings.whisper.language.is_empty() {
            None
        } else {
            Some(settings.whisper.language.clone())
        };

        Ok(Self {
            ctx,
            language,
            translate: settings.whisper.translate,
            threads: settings.whisper.threads,
        })
    }

    /// Transcribe prepared samples into plain text
    pub fn transcribe(&self, samples: &[f32]) -> Result<String> {
        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        // Configure parameters
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_translate(self.translate);

        if let Some(ref lang) = self.language {
            params.set_language(Some(lang));
        }
        if self.threads > 0 {
            params.set_n_threads(self.threads as i32);
        }

        // Run inference
        let mut state = self.ctx.create_state().context("Failed to create Whisper state")?;
        state
            .full(params, samples)
            .context("Whisper inference failed")?;

        // Join segments into one transcript string
        let num_segments = state.full_n_segments().context("Failed to get segment count")?;
        let mut text = String::new();

        for i in 0..num_segments {
            let segment = state
                .full_get_segment_text(i)
                .context("Failed to get segment text")?;

            // Skip empty or whitespace-only segments
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(segment);
        }

        Ok(text)
    }

    /// Decode an audio file, normalize it to the 30-second model window,
    /// and transcribe it.
    pub fn transcribe_file(&self, path: &Path) -> Result<String> {
        let samples = load_audio(path)?;
        let samples = pad_or_trim(samples, CHUNK_SAMPLES);
        self.transcribe(&samples)
    }
}
