//! The document source abstraction used by the sync pipeline.

use async_trait::async_trait;
use folio_core::{Block, SourceDocument};

use crate::client::NotionClient;
use crate::error::Result;

/// Somewhere published documents and their blocks can be fetched from.
///
/// The Notion client is the production implementation; tests substitute
/// in-memory sources.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Published documents, newest first.
    async fn fetch_published_documents(&self) -> Result<Vec<SourceDocument>>;

    /// Top-level blocks of one document, in order.
    async fn fetch_blocks(&self, document_id: &str) -> Result<Vec<Block>>;
}

#[async_trait]
impl DocumentSource for NotionClient {
    async fn fetch_published_documents(&self) -> Result<Vec<SourceDocument>> {
        self.query_published().await
    }

    async fn fetch_blocks(&self, document_id: &str) -> Result<Vec<Block>> {
        self.block_children(document_id).await
    }
}
