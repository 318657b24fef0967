//! Common test utilities for folio-cli integration tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use folio_cli::{PostWriter, Syncer};
use folio_content::DocumentConverter;
use folio_core::{Block, FixedClock, Properties, PropertyValue, SourceDocument};
use folio_notion::{DocumentSource, Error, Result};

/// An in-memory document source.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: Vec<SourceDocument>,
    blocks: HashMap<String, Vec<Block>>,
    failing: HashSet<String>,
    list_fails: bool,
}

impl MemorySource {
    /// An empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with its blocks.
    pub fn with_document(mut self, document: SourceDocument, blocks: Vec<Block>) -> Self {
        self.blocks.insert(document.id.clone(), blocks);
        self.documents.push(document);
        self
    }

    /// Add a document whose block fetch fails.
    pub fn with_failing_document(mut self, document: SourceDocument) -> Self {
        self.failing.insert(document.id.clone());
        self.documents.push(document);
        self
    }

    /// Make the listing itself fail.
    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }
}

fn api_error(status: u16, message: &str) -> Error {
    Error::Api {
        status,
        code: "test_error".to_string(),
        message: message.to_string(),
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch_published_documents(&self) -> Result<Vec<SourceDocument>> {
        if self.list_fails {
            return Err(api_error(401, "API token is invalid"));
        }
        Ok(self.documents.clone())
    }

    async fn fetch_blocks(&self, document_id: &str) -> Result<Vec<Block>> {
        if self.failing.contains(document_id) {
            return Err(api_error(404, "Could not find block"));
        }
        Ok(self.blocks.get(document_id).cloned().unwrap_or_default())
    }
}

/// The clock every test run uses: 2024-06-01T12:00:00Z.
pub fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

/// A syncer over `source` writing into `dir`.
pub fn syncer(source: MemorySource, dir: &std::path::Path) -> Syncer<MemorySource, FixedClock> {
    Syncer::new(source, DocumentConverter::new(clock()), PostWriter::new(dir))
}

/// A published document with a title and date.
pub fn post(id: &str, title: &str, date: &str) -> SourceDocument {
    SourceDocument::new(
        id,
        Properties::new()
            .with("Name", PropertyValue::Title(title.to_string()))
            .with("Published Date", PropertyValue::Date(date.to_string())),
    )
}

/// Split a written post into its parsed front matter and its body.
pub fn split_post(text: &str) -> (serde_yaml::Value, String) {
    let rest = text.strip_prefix("---\n").unwrap();
    let (yaml, body) = rest.split_once("\n---\n").unwrap();
    (serde_yaml::from_str(yaml).unwrap(), body.to_string())
}
