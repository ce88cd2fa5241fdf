//! Whisper model catalog and downloads

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;

/// Whisper model sizes available for download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhisperModel {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl WhisperModel {
    /// All models, smallest first
    pub const ALL: [WhisperModel; 5] = [
        WhisperModel::Tiny,
        WhisperModel::Base,
        WhisperModel::Small,
        WhisperModel::Medium,
        WhisperModel::Large,
    ];

    /// Name as used in configuration and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            WhisperModel::Tiny => "tiny",
            WhisperModel::Base => "base",
            WhisperModel::Small => "small",
            WhisperModel::Medium => "medium",
            WhisperModel::Large => "large",
        }
    }

    /// File name the weights are stored under locally
    pub fn filename(&self) -> String {
        format!("ggml-{}.bin", self.name())
    }

    /// Hugging Face URL for the ggml weights
    pub fn url(&self) -> &'static str {
        match self {
            WhisperModel::Tiny => {
                "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-tiny.bin"
            }
            WhisperModel::Base => {
                "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.bin"
            }
            WhisperModel::Small => {
                "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-small.bin"
            }
            WhisperModel::Medium => {
                "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-medium.bin"
            }
            WhisperModel::Large => {
                "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-large-v3.bin"
            }
        }
    }

    /// Approximate download size in MB
    pub fn size_mb(&self) -> u64 {
        match self {
            WhisperModel::Tiny => 75,
            WhisperModel::Base => 142,
            WhisperModel::Small => 466,
            WhisperModel::Medium => 1500,
            WhisperModel::Large => 3100,
        }
    }

    /// Whether the weights are already in the configured models directory
    pub fn is_downloaded(&self, settings: &Settings) -> bool {
        settings.whisper.models_dir.join(self.filename()).exists()
    }
}

impl std::fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for WhisperModel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tiny" => Ok(WhisperModel::Tiny),
            "base" => Ok(WhisperModel::Base),
            "small" => Ok(WhisperModel::Small),
            "medium" => Ok(WhisperModel::Medium),
            "large" => Ok(WhisperModel::Large),
            _ => Err(format!(
                "Unknown model: {}. Use tiny, base, small, medium, or large",
                s
            )),
        }
    }
}

/// Download the model weights into the configured models directory,
/// streaming through a temp file so an interrupted download never leaves
/// partial weights at the final path. Returns that path.
pub async fn download_model(settings: &Settings, model: WhisperModel) -> Result<PathBuf> {
    let models_dir = &settings.whisper.models_dir;
    std::fs::create_dir_all(models_dir).with_context(|| {
        format!("Failed to create models directory: {}", models_dir.display())
    })?;

    let path = models_dir.join(model.filename());
    if path.exists() {
        info!("Model {} already present at {}", model, path.display());
        return Ok(path);
    }

    info!(
        "Downloading Whisper {} model (~{} MB)...",
        model,
        model.size_mb()
    );

    let mut response = reqwest::Client::new()
        .get(model.url())
        .send()
        .await
        .context("Model download request failed")?;

    if !response.status().is_success() {
        anyhow::bail!(
            "Model download failed: HTTP {} from {}",
            response.status(),
            model.url()
        );
    }

    let temp_path = path.with_extension("bin.partial");
    let mut file = std::fs::File::create(&temp_path)
        .with_context(|| format!("Failed to create {}", temp_path.display()))?;

    let mut downloaded: u64 = 0;
    let mut last_logged: u64 = 0;
    while let Some(chunk) = response.chunk().await.context("Model download interrupted")? {
        file.write_all(&chunk)?;
        downloaded += chunk.len() as u64;
        if downloaded - last_logged >= 100 * 1024 * 1024 {
            info!("Downloaded {} MB...", downloaded / (1024 * 1024));
            last_logged = downloaded;
        }
    }
    file.flush()?;
    drop(file);

    std::fs::rename(&temp_path, &path)
        .with_context(|| format!("Failed to move model into place: {}", path.display()))?;

    info!("Model saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_model_names_case_insensitively() {
        assert_eq!(WhisperModel::from_str("tiny").unwrap(), WhisperModel::Tiny);
        assert_eq!(WhisperModel::from_str("SMALL").unwrap(), WhisperModel::Small);
        assert!(WhisperModel::from_str("enormous").is_err());
    }

    #[test]
    fn filename_matches_configured_model_path() {
        let mut settings = Settings::default();
        for model in WhisperModel::ALL {
            settings.whisper.model = model.name().to_string();
            assert_eq!(
                settings.model_path(),
                settings.whisper.models_dir.join(model.filename())
            );
        }
    }

    #[test]
    fn download_urls_point_at_ggml_weights() {
        for model in WhisperModel::ALL {
            assert!(model.url().starts_with("https://huggingface.co/ggerganov/whisper.cpp/"));
            assert!(model.url().ends_with(".bin"));
        }
    }

    #[test]
    fn is_downloaded_reflects_models_dir_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.whisper.models_dir = dir.path().to_path_buf();

        assert!(!WhisperModel::Base.is_downloaded(&settings));
        std::fs::write(dir.path().join("ggml-base.bin"), b"weights").unwrap();
        assert!(WhisperModel::Base.is_downloaded(&settings));
    }
}
