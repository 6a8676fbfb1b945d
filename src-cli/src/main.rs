//! chat-export - Export a chat transcript
//!
//! Loads a transcript JSON file and writes it as a themed PDF, a plain-text
//! file, or clipboard text.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use doc_model::{ConversationLog, Participants};
use render_model::Theme;
use store::{ExportSettings, SettingsManager};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transcript::{Exporter, SystemClipboard};

#[derive(Parser)]
#[command(name = "chat-export")]
#[command(version, about = "Export chat transcripts", long_about = None)]
#[command(after_help = "EXAMPLES:
    chat-export chat.json                       Write a dark-themed PDF
    chat-export chat.json --theme light --out exports
    chat-export chat.json --format text --user ada")]
struct Cli {
    /// Transcript JSON: an array of messages or {"messages": [...]}
    #[arg(value_name = "TRANSCRIPT")]
    input: PathBuf,

    /// User display name
    #[arg(long, value_name = "NAME")]
    user: Option<String>,

    /// Assistant display name
    #[arg(long, value_name = "NAME")]
    assistant: Option<String>,

    /// Document theme; unknown names use dark
    #[arg(long, default_value = "dark")]
    theme: String,

    #[arg(long, value_enum, default_value_t = Format::Pdf)]
    format: Format,

    /// Output directory, overriding the settings file
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Settings JSON file
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Pdf,
    Text,
    Clipboard,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut settings = load_settings(cli.settings.as_ref())?;
    if let Some(out) = cli.out {
        settings.output.directory = out;
    }

    let log = ConversationLog::from_json_file(&cli.input)
        .with_context(|| format!("failed to read transcript {}", cli.input.display()))?;
    let participants = Participants::new(cli.user, cli.assistant);
    let theme = Theme::from_name(&cli.theme);
    let exporter = Exporter::new(settings);

    match cli.format {
        Format::Pdf => {
            let artifact = exporter.export_document(&log, &participants, theme)?;
            println!(
                "Wrote {} ({} pages)",
                artifact.path.display(),
                artifact.page_count
            );
        }
        Format::Text => {
            let artifact = exporter.export_plain_text(&log, &participants)?;
            println!("Wrote {}", artifact.path.display());
        }
        Format::Clipboard => {
            if log.is_empty() {
                anyhow::bail!(transcript::ExportError::EmptyTranscript);
            }
            let text = exporter.plain_text(&log, &participants);
            let mut clipboard = SystemClipboard::new()?;
            exporter.copy_plain_text(&mut clipboard, &text)?;
            println!("Copied {} characters to clipboard", text.len());
        }
    }

    Ok(())
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<ExportSettings> {
    let Some(path) = path else {
        return Ok(ExportSettings::default());
    };

    let mut manager = SettingsManager::with_path(path);
    let settings = manager
        .load_sync()
        .with_context(|| format!("failed to load settings {}", path.display()))?
        .clone();
    tracing::info!("Loaded settings from {:?}", manager.settings_path());
    Ok(settings)
}
