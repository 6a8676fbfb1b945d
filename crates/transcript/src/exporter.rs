//! Transcript exporter
//!
//! Turns a conversation log into a persisted artifact: a PDF document, a
//! plain-text file, or clipboard text. Failures are returned to the caller
//! and never shown to the user from here.

use crate::{
    export_file_name, plain_text_transcript, ClipboardSink, DisplayNames, DocumentKind,
    ExportError, RenderedDocument, Result, TranscriptRenderer,
};
use chrono::{DateTime, Utc};
use doc_model::{ConversationLog, Participants};
use render_model::Theme;
use std::path::{Path, PathBuf};
use store::{write_atomic, write_atomic_async, ExportSettings, StoreError};
use tracing::{error, info};

/// A persisted export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedArtifact {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub page_count: usize,
    pub bytes_written: usize,
}

/// Exports transcripts into the configured output directory
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    renderer: TranscriptRenderer,
}

impl Exporter {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            renderer: TranscriptRenderer::new(settings),
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        self.renderer.settings()
    }

    pub fn output_dir(&self) -> &Path {
        &self.settings().output.directory
    }

    /// Render the transcript to PDF and persist it
    pub fn export_document(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        theme: Theme,
    ) -> Result<ExportedArtifact> {
        self.export_document_at(log, participants, theme, Utc::now())
    }

    pub fn export_document_at(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        theme: Theme,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportedArtifact> {
        let document = self.export_document_bytes_at(log, participants, theme, generated_at)?;
        self.persist(&document)
    }

    /// Render the transcript to PDF without persisting it
    pub fn export_document_bytes(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        theme: Theme,
    ) -> Result<RenderedDocument> {
        self.export_document_bytes_at(log, participants, theme, Utc::now())
    }

    fn export_document_bytes_at(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        theme: Theme,
        generated_at: DateTime<Utc>,
    ) -> Result<RenderedDocument> {
        ensure_not_empty(log)?;
        self.renderer.render_at(log, participants, theme, generated_at)
    }

    /// Render and persist the PDF using tokio file I/O
    pub async fn export_document_async(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        theme: Theme,
    ) -> Result<ExportedArtifact> {
        let document = self.export_document_bytes(log, participants, theme)?;
        self.persist_async(&document).await
    }

    /// Write the plain-text transcript to a `.txt` file
    pub fn export_plain_text(
        &self,
        log: &ConversationLog,
        participants: &Participants,
    ) -> Result<ExportedArtifact> {
        self.export_plain_text_at(log, participants, Utc::now())
    }

    pub fn export_plain_text_at(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportedArtifact> {
        let document = self.export_plain_text_bytes_at(log, participants, generated_at)?;
        self.persist(&document)
    }

    /// Build the plain-text transcript without persisting it
    pub fn export_plain_text_bytes(
        &self,
        log: &ConversationLog,
        participants: &Participants,
    ) -> Result<RenderedDocument> {
        self.export_plain_text_bytes_at(log, participants, Utc::now())
    }

    fn export_plain_text_bytes_at(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        generated_at: DateTime<Utc>,
    ) -> Result<RenderedDocument> {
        ensure_not_empty(log)?;
        let names = self.names(participants);
        let text = plain_text_transcript(log, &names);

        Ok(RenderedDocument {
            file_name: export_file_name(
                &names,
                generated_at.date_naive(),
                DocumentKind::PlainText,
            ),
            kind: DocumentKind::PlainText,
            bytes: text.into_bytes(),
            page_count: 1,
        })
    }

    /// Write the plain-text transcript using tokio file I/O
    pub async fn export_plain_text_async(
        &self,
        log: &ConversationLog,
        participants: &Participants,
    ) -> Result<ExportedArtifact> {
        let document = self.export_plain_text_bytes(log, participants)?;
        self.persist_async(&document).await
    }

    /// The plain-text transcript with this exporter's name defaults
    pub fn plain_text(&self, log: &ConversationLog, participants: &Participants) -> String {
        plain_text_transcript(log, &self.names(participants))
    }

    /// Copy literal text to a clipboard
    pub fn copy_plain_text<S>(&self, sink: &mut S, text: &str) -> Result<()>
    where
        S: ClipboardSink + ?Sized,
    {
        match sink.set_text(text) {
            Ok(()) => {
                info!(chars = text.len(), "copied transcript to clipboard");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "clipboard copy failed");
                Err(match err {
                    ExportError::Clipboard(_) => err,
                    other => ExportError::Clipboard(other.to_string()),
                })
            }
        }
    }

    fn names(&self, participants: &Participants) -> DisplayNames {
        DisplayNames::resolve_with(participants, &self.settings().output)
    }

    fn persist(&self, document: &RenderedDocument) -> Result<ExportedArtifact> {
        let path = self.output_dir().join(&document.file_name);
        let written = std::fs::create_dir_all(self.output_dir())
            .map_err(StoreError::from)
            .and_then(|()| write_atomic(&path, &document.bytes));
        self.finish(document, path, written)
    }

    async fn persist_async(&self, document: &RenderedDocument) -> Result<ExportedArtifact> {
        let path = self.output_dir().join(&document.file_name);
        let written = match tokio::fs::create_dir_all(self.output_dir()).await {
            Ok(()) => write_atomic_async(&path, &document.bytes).await,
            Err(e) => Err(StoreError::from(e)),
        };
        self.finish(document, path, written)
    }

    fn finish(
        &self,
        document: &RenderedDocument,
        path: PathBuf,
        written: store::Result<()>,
    ) -> Result<ExportedArtifact> {
        if let Err(err) = written {
            error!(path = %path.display(), error = %err, "failed to persist export");
            return Err(err.into());
        }

        info!(
            path = %path.display(),
            kind = document.kind.extension(),
            pages = document.page_count,
            bytes = document.bytes.len(),
            "exported transcript"
        );
        Ok(ExportedArtifact {
            path,
            kind: document.kind,
            page_count: document.page_count,
            bytes_written: document.bytes.len(),
        })
    }
}

fn ensure_not_empty(log: &ConversationLog) -> Result<()> {
    if log.is_empty() {
        return Err(ExportError::EmptyTranscript);
    }
    Ok(())
}
