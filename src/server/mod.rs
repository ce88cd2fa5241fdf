//! HTTP server module for debrief
//!
//! Serves the upload page and the transcription endpoint.

mod routes;
mod upload;

pub use routes::router;
pub use upload::{generate_upload_filename, save_upload, validate_upload, VALID_EXTENSIONS};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Settings;
use crate::transcription::WhisperTranscriber;

/// Shared state for request handlers
pub struct AppState {
    pub settings: Settings,
    pub transcriber: WhisperTranscriber,
}

/// Run the upload server until ctrl-c.
///
/// The Whisper model is loaded once at startup, so a missing model fails
/// here rather than on the first request.
pub async fn run(settings: Settings) -> Result<()> {
    settings.ensure_dirs()?;

    info!("Loading Whisper model '{}'", settings.whisper.model);
    let transcriber = WhisperTranscriber::new(&settings)?;

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let state = Arc::new(AppState {
        settings,
        transcriber,
    });
    let app = router(state);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid server address: {host}:{port}"))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
