//! debrief - Conversation transcription server and CSV report generator
//!
//! Entry point for the debrief CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use debrief::cli::{Cli, Commands};
use debrief::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            debrief::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Serve { host, port } => {
                    debrief::cli::commands::serve(settings, host, port).await?;
                }
                Commands::Report {
                    conversations,
                    keywords,
                    output,
                } => {
                    debrief::cli::commands::report(&settings, conversations, keywords, output)
                        .await?;
                }
                Commands::Model(model_cmd) => {
                    debrief::cli::commands::model_command(&settings, model_cmd).await?;
                }
                Commands::Doctor { json } => {
                    debrief::cli::commands::run_doctor(&settings, json).await?;
                }
                Commands::Config(config_cmd) => {
                    debrief::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
