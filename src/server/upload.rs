//! Upload validation and storage

use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::{DebriefError, Result};

/// Accepted upload extensions, lowercase
pub const VALID_EXTENSIONS: [&str; 3] = ["wav", "mp3", "m4a"];

/// Validate a declared upload filename and return its lowercased
/// extension. The error strings surface verbatim in 400 responses.
pub fn validate_upload(filename: &str) -> Result<String> {
    if filename.is_empty() {
        return Err(DebriefError::InvalidUpload("No selected file".to_string()));
    }

    let extension = filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
    match extension {
        Some(ext) if VALID_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(DebriefError::InvalidUpload(
            "Invalid file type. Only .wav, .mp3, .m4a are allowed.".to_string(),
        )),
    }
}

/// Generate the collision-resistant stored filename for an upload: unix
/// timestamp, random hex token, and the lowercased original extension.
pub fn generate_upload_filename(extension: &str) -> String {
    format!(
        "{}_{}.{}",
        Utc::now().timestamp(),
        Uuid::new_v4().simple(),
        extension
    )
}

/// Write upload bytes into the uploads directory under a generated name.
/// Returns the stored path.
pub fn save_upload(uploads_dir: &Path, extension: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = uploads_dir.join(generate_upload_filename(extension));
    std::fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_audio_extensions_case_insensitively() {
        assert_eq!(validate_upload("talk.wav").unwrap(), "wav");
        assert_eq!(validate_upload("talk.MP3").unwrap(), "mp3");
        assert_eq!(validate_upload("Talk.M4a").unwrap(), "m4a");
    }

    #[test]
    fn accepts_extension_only_filenames() {
        // ".wav" splits into an empty stem and a valid extension
        assert_eq!(validate_upload(".wav").unwrap(), "wav");
    }

    #[test]
    fn rejects_empty_filename() {
        let err = validate_upload("").unwrap_err();
        assert_eq!(err.to_string(), "No selected file");
    }

    #[test]
    fn rejects_disallowed_extensions() {
        for name in ["notes.txt", "archive.ogg", "clip.wav.exe", "noext", "audio."] {
            let err = validate_upload(name).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid file type. Only .wav, .mp3, .m4a are allowed.",
                "expected rejection for {name}"
            );
        }
    }

    #[test]
    fn generated_names_have_timestamp_token_extension() {
        let name = generate_upload_filename("wav");
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "wav");

        let (timestamp, token) = stem.split_once('_').unwrap();
        assert!(timestamp.parse::<i64>().is_ok());
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_names_are_unique() {
        assert_ne!(generate_upload_filename("wav"), generate_upload_filename("wav"));
    }

    #[test]
    fn save_upload_writes_bytes_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_upload(dir.path(), "mp3", b"fake audio").unwrap();

        assert!(path.starts_with(dir.path()));
        assert_eq!(path.extension().unwrap(), "mp3");
        assert_eq!(std::fs::read(&path).unwrap(), b"fake audio");
    }
}
