//! Persisting rendered posts.

use std::path::{Path, PathBuf};

use folio_content::assemble;
use folio_core::{Error, RenderedDocument, Result};

/// Writes assembled posts into one output directory.
#[derive(Debug, Clone)]
pub struct PostWriter {
    output_dir: PathBuf,
}

impl PostWriter {
    /// Creates a writer for `output_dir`. Nothing is touched until a write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where `document` will be written.
    pub fn target_path(&self, document: &RenderedDocument) -> PathBuf {
        self.output_dir.join(document.file_name())
    }

    /// Write `document`, replacing any existing file of the same name.
    pub async fn write(&self, document: &RenderedDocument) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| Error::io_with_path(e, &self.output_dir))?;

        if document.uses_id_fallback() {
            tracing::warn!(
                document_id = %document.id,
                "Post has an empty slug; naming the file after the document id"
            );
        }

        let path = self.target_path(document);
        tokio::fs::write(&path, assemble(document))
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;

        tracing::debug!(path = %path.display(), "Wrote post");
        Ok(path)
    }
}
