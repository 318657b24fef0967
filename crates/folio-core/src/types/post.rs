//! Post-level records: source documents, derived metadata, rendered output.

use serde::{Deserialize, Serialize};

use super::property::Properties;
use crate::util::ids::{file_stem_from_id, slugify};

/// One entry of the remote published-document listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Remote document identifier.
    pub id: String,
    /// Typed properties of the document.
    pub properties: Properties,
}

impl SourceDocument {
    /// Creates a source document.
    pub fn new(id: impl Into<String>, properties: Properties) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }
}

/// Front-matter metadata derived from a document's properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    /// Post title; empty when the source has none.
    pub title: String,
    /// ISO-8601 publish date.
    pub date: String,
    /// URL-safe identifier, `[a-z0-9-]*`; empty only for untitled, unslugged posts.
    pub slug: String,
    /// Short summary.
    pub description: String,
    /// Tags in source order.
    pub tags: Vec<String>,
    /// Single category.
    pub category: String,
}

/// A fully converted document, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Remote document identifier.
    pub id: String,
    /// Front-matter metadata.
    pub metadata: PostMetadata,
    /// Markdown body.
    pub body: String,
}

impl RenderedDocument {
    /// Creates a rendered document.
    pub fn new(id: impl Into<String>, metadata: PostMetadata, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata,
            body: body.into(),
        }
    }

    /// File stem for the persisted post.
    ///
    /// The slug, normalized to `[a-z0-9-]`, when anything survives
    /// normalization; otherwise the remote ID reduced to its alphanumerics,
    /// so an untitled post never becomes `.md`. The stem never contains a
    /// path separator or `..`.
    pub fn file_stem(&self) -> String {
        let stem = slugify(&self.metadata.slug);
        if stem.is_empty() {
            file_stem_from_id(&self.id)
        } else {
            stem
        }
    }

    /// File name for the persisted post (`<stem>.md`).
    pub fn file_name(&self) -> String {
        format!("{}.md", self.file_stem())
    }

    /// Returns `true` when the file name had to fall back to the remote ID.
    pub fn uses_id_fallback(&self) -> bool {
        slugify(&self.metadata.slug).is_empty()
    }
}
