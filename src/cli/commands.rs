//! CLI command implementations

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::{ConfigCommand, ModelCommand};
use crate::config::Settings;
use crate::llm::build_provider;
use crate::report::{generate_reports, load_keyword_table};
use crate::transcription::{download_model, WhisperModel};

/// Start the upload server, applying any CLI overrides to the
/// configured bind address.
pub async fn serve(mut settings: Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    crate::server::run(settings).await
}

/// Generate a keyword report for every conversation transcript.
pub async fn report(
    settings: &Settings,
    conversations: Option<PathBuf>,
    keywords: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let conversations_dir =
        conversations.unwrap_or_else(|| settings.report.conversations_dir.clone());
    let keywords_file = keywords.unwrap_or_else(|| settings.report.keywords_file.clone());
    let reports_dir = output.unwrap_or_else(|| settings.report.reports_dir.clone());

    let table = load_keyword_table(&keywords_file)?;
    let provider = build_provider(settings)?;

    let written =
        generate_reports(&conversations_dir, &table, provider.as_ref(), &reports_dir).await?;

    if written.is_empty() {
        println!(
            "No .txt conversations found in {}",
            conversations_dir.display()
        );
        return Ok(());
    }

    for path in &written {
        println!("Report saved to {}", path.display());
    }
    println!();
    println!(
        "{} report(s) written to {}",
        written.len(),
        reports_dir.display()
    );

    Ok(())
}

/// Handle model subcommands
pub async fn model_command(settings: &Settings, cmd: ModelCommand) -> Result<()> {
    match cmd {
        ModelCommand::List => {
            println!("{:<8} {:>8}  {}", "MODEL", "SIZE", "STATUS");
            println!("{}", "-".repeat(40));

            for model in WhisperModel::ALL {
                let mut status = if model.is_downloaded(settings) {
                    "downloaded".to_string()
                } else {
                    "not downloaded".to_string()
                };
                if settings.whisper.model == model.name() {
                    status.push_str(" (configured)");
                }
                println!("{:<8} {:>5} MB  {}", model.name(), model.size_mb(), status);
            }
        }
        ModelCommand::Download { name } => {
            let name = name.unwrap_or_else(|| settings.whisper.model.clone());
            let model: WhisperModel = name.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let path = download_model(settings, model).await?;
            println!("Model '{}' ready at {}", model, path.display());
        }
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorPaths {
    config: String,
    data_dir: String,
    model: String,
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: &'static str,
}

#[derive(Serialize)]
struct DoctorReport {
    model: String,
    paths: DoctorPaths,
    checks: Vec<DoctorCheck>,
    notes: Vec<String>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("debrief doctor");
    println!("model: {}", report.model);
    println!("config: {}", report.paths.config);
    println!("data: {}", report.paths.data_dir);
    println!();

    for check in &report.checks {
        println!("{:<10} {:<8} {}", check.name, check.status, check.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let model_path = settings.model_path();
    let model_ok = model_path.exists();
    let uploads_ok = std::fs::create_dir_all(settings.uploads_dir()).is_ok();
    let transcriptions_ok = std::fs::create_dir_all(settings.transcriptions_dir()).is_ok();
    let keywords_ok = settings.report.keywords_file.exists();
    let api_key_ok = !settings.llm.api_key.trim().is_empty();

    let mut notes = Vec::new();

    if !model_ok {
        notes.push(format!(
            "hint: run `debrief model download {}` to fetch the configured model.",
            settings.whisper.model
        ));
    }
    if !keywords_ok {
        notes.push(format!(
            "hint: the report command reads its keyword table from {} (or pass --keywords).",
            settings.report.keywords_file.display()
        ));
    }
    if !api_key_ok {
        notes.push(
            "hint: set llm.api_key in the config or export DEBRIEF_GEMINI_API_KEY to enable report summaries."
                .to_string(),
        );
    }

    DoctorReport {
        model: settings.whisper.model.clone(),
        paths: DoctorPaths {
            config: Settings::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "unknown".to_string()),
            data_dir: settings.general.data_dir.display().to_string(),
            model: model_path.display().to_string(),
        },
        checks: vec![
            DoctorCheck {
                name: "model",
                status: if model_ok { "ok" } else { "missing" },
                detail: "whisper weights used by the serve command",
            },
            DoctorCheck {
                name: "uploads",
                status: if uploads_ok { "ok" } else { "failed" },
                detail: "where uploaded audio is stored",
            },
            DoctorCheck {
                name: "transcripts",
                status: if transcriptions_ok { "ok" } else { "failed" },
                detail: "where transcript text is stored",
            },
            DoctorCheck {
                name: "keywords",
                status: if keywords_ok { "ok" } else { "missing" },
                detail: "category table used by the report command",
            },
            DoctorCheck {
                name: "api-key",
                status: if api_key_ok { "ok" } else { "missing" },
                detail: "Gemini key used for conversation summaries",
            },
        ],
        notes,
    }
}
