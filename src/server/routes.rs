//! HTTP routes and handlers

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::server::upload::{save_upload, validate_upload};
use crate::server::AppState;
use crate::storage;
use crate::DebriefError;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    // Uploads larger than the folder ceiling could never be retained, so
    // the body limit follows the ceiling.
    let body_limit = state.settings.max_folder_size_bytes() as usize;
    Router::new()
        .route("/", get(index))
        .route("/transcribe", post(transcribe))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn transcribe(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> (StatusCode, Json<serde_json::Value>) {
    match handle_upload(state, multipart).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(DebriefError::InvalidUpload(message)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
        }
        Err(err) => {
            error!("Transcription request failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
        }
    }
}

/// Upload flow: validate, save, evict, transcribe, persist, evict.
async fn handle_upload(
    state: Arc<AppState>,
    mut multipart: Multipart,
) -> crate::Result<serde_json::Value> {
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DebriefError::InvalidUpload(format!("Malformed multipart body: {e}")))?
    {
        if upload.is_none() && field.name() == Some("audio") {
            let filename = field.file_name().unwrap_or("").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| DebriefError::InvalidUpload(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, bytes));
        }
    }

    let Some((filename, bytes)) = upload else {
        return Err(DebriefError::InvalidUpload(
            "No audio file provided".to_string(),
        ));
    };

    let extension = validate_upload(&filename)?;

    let ceiling_mb = state.settings.server.max_folder_size_mb;
    let uploads_dir = state.settings.uploads_dir();
    let audio_path = save_upload(&uploads_dir, &extension, &bytes)?;
    info!("Saved upload {} ({} bytes)", audio_path.display(), bytes.len());
    storage::enforce_ceiling(&uploads_dir, ceiling_mb)
        .map_err(|e| DebriefError::Other(format!("{e:#}")))?;

    // CPU-bound whisper inference runs on the blocking pool
    let transcription = {
        let state = Arc::clone(&state);
        let path = audio_path.clone();
        tokio::task::spawn_blocking(move || state.transcriber.transcribe_file(&path))
            .await
            .map_err(|e| DebriefError::Other(format!("Transcription task failed: {e}")))?
            .map_err(|e| DebriefError::Transcription(format!("{e:#}")))?
    };

    let transcriptions_dir = state.settings.transcriptions_dir();
    let transcript_filename = audio_path
        .with_extension("txt")
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "transcript.txt".into());
    let transcript_path = transcriptions_dir.join(transcript_filename);
    std::fs::write(&transcript_path, &transcription)?;
    info!("Saved transcript {}", transcript_path.display());
    storage::enforce_ceiling(&transcriptions_dir, ceiling_mb)
        .map_err(|e| DebriefError::Other(format!("{e:#}")))?;

    Ok(json!({
        "transcription": transcription,
        "audio_path": audio_path.to_string_lossy(),
        "transcription_path": transcript_path.to_string_lossy(),
    }))
}
