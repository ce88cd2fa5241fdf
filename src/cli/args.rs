//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// debrief - Conversation transcription server and CSV report generator
#[derive(Parser, Debug)]
#[command(name = "debrief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the transcription upload server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate keyword-spotted CSV reports from conversation transcripts
    Report {
        /// Directory of .txt transcripts (overrides config)
        #[arg(short, long)]
        conversations: Option<PathBuf>,

        /// Category/Keywords CSV table (overrides config)
        #[arg(short, long)]
        keywords: Option<PathBuf>,

        /// Output directory for report CSVs (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Whisper model management
    #[command(subcommand)]
    Model(ModelCommand),

    /// Run diagnostic checks on the local setup
    Doctor {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ModelCommand {
    /// List available models and their download status
    List,

    /// Download model weights from Hugging Face
    Download {
        /// Model name (tiny, base, small, medium, large); defaults to the
        /// configured model
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
