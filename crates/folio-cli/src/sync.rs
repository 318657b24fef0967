//! Sync orchestration: list published documents, convert each, write it.
//!
//! A failure to list documents aborts the run. A failure on one document
//! (fetching its blocks or writing its file) is recorded in the
//! [`SyncReport`] and the run moves on to the next document.

use std::path::PathBuf;

use folio_content::DocumentConverter;
use folio_core::{Clock, RenderedDocument, SourceDocument, SystemClock};
use folio_notion::DocumentSource;

use crate::error::{Error, Result};
use crate::writer::PostWriter;

/// One document that could not be synced.
#[derive(Debug)]
pub struct SyncFailure {
    /// Source document id.
    pub document_id: String,
    /// Extracted title, for reporting.
    pub title: String,
    /// What went wrong.
    pub error: Error,
}

/// Outcome of a sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Number of published documents listed.
    pub found: usize,
    /// Files written, or that would be written on a dry run, in source order.
    pub written: Vec<PathBuf>,
    /// Documents that failed.
    pub failures: Vec<SyncFailure>,
    /// Whether files were left untouched.
    pub dry_run: bool,
}

impl SyncReport {
    /// Returns `true` when every listed document was synced.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Closing summary: `Synced: N posts`, plus `Errors: M posts` when any
    /// document failed.
    pub fn summary(&self) -> String {
        let mut summary = format!("Synced: {} posts", self.written.len());
        if !self.is_clean() {
            summary.push_str(&format!("\nErrors: {} posts", self.failures.len()));
        }
        summary
    }
}

/// Drives one sync run against a [`DocumentSource`].
pub struct Syncer<S, C = SystemClock> {
    source: S,
    converter: DocumentConverter<C>,
    writer: PostWriter,
    dry_run: bool,
}

impl<S: DocumentSource, C: Clock> Syncer<S, C> {
    /// Creates a syncer that writes through `writer`.
    pub fn new(source: S, converter: DocumentConverter<C>, writer: PostWriter) -> Self {
        Self {
            source,
            converter,
            writer,
            dry_run: false,
        }
    }

    /// Render everything but skip writing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the sync.
    pub async fn run(&self) -> Result<SyncReport> {
        let documents = self.source.fetch_published_documents().await?;
        tracing::info!(count = documents.len(), "Found published documents");

        let mut report = SyncReport {
            found: documents.len(),
            dry_run: self.dry_run,
            ..SyncReport::default()
        };

        for document in &documents {
            match self.sync_one(document).await {
                Ok(path) => report.written.push(path),
                Err(error) => {
                    let title = self.converter.extractor().extract(&document.properties).title;
                    tracing::error!(
                        document_id = %document.id,
                        title = %title,
                        error = %error,
                        "Failed to sync document"
                    );
                    report.failures.push(SyncFailure {
                        document_id: document.id.clone(),
                        title,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            written = report.written.len(),
            failed = report.failures.len(),
            "Sync finished"
        );
        Ok(report)
    }

    async fn sync_one(&self, document: &SourceDocument) -> Result<PathBuf> {
        let blocks = self.source.fetch_blocks(&document.id).await?;
        let rendered = self.converter.convert(document, &blocks);
        self.persist(&rendered).await
    }

    async fn persist(&self, rendered: &RenderedDocument) -> Result<PathBuf> {
        if self.dry_run {
            let path = self.writer.target_path(rendered);
            tracing::debug!(path = %path.display(), "Dry run; not writing");
            return Ok(path);
        }
        Ok(self.writer.write(rendered).await?)
    }
}

// ============================================================================
// Tests
// ============================================================================
