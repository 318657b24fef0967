//! Document assembly: metadata plus rendered body into one post.
//!
//! [`DocumentConverter`] runs the metadata extractor and the block renderer
//! for one source document; [`assemble`] produces the final file text.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use folio_content::{assemble, DocumentConverter};
//! use folio_core::{Block, FixedClock, InlineSpan, Properties, PropertyValue, SourceDocument};
//!
//! let converter = DocumentConverter::new(FixedClock::new(
//!     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//! ));
//! let source = SourceDocument::new(
//!     "page-1",
//!     Properties::new().with("Name", PropertyValue::Title("Hello".into())),
//! );
//! let blocks = vec![Block::paragraph(vec![InlineSpan::plain("Hi.")])];
//!
//! let document = converter.convert(&source, &blocks);
//! assert_eq!(document.file_name(), "hello.md");
//! assert!(assemble(&document).ends_with("draft: false\n---\nHi.\n"));
//! ```

use folio_core::{Block, Clock, RenderedDocument, SourceDocument, SystemClock};

use crate::markdown::blocks::render_blocks;
use crate::markdown::frontmatter::render_front_matter;
use crate::metadata::MetadataExtractor;

/// Converts source documents and their blocks into [`RenderedDocument`]s.
#[derive(Debug, Clone, Default)]
pub struct DocumentConverter<C = SystemClock> {
    extractor: MetadataExtractor<C>,
}

impl<C: Clock> DocumentConverter<C> {
    /// Creates a converter whose metadata date fallback uses `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            extractor: MetadataExtractor::new(clock),
        }
    }

    /// The metadata extractor this converter uses.
    pub fn extractor(&self) -> &MetadataExtractor<C> {
        &self.extractor
    }

    /// Convert one document.
    pub fn convert(&self, source: &SourceDocument, blocks: &[Block]) -> RenderedDocument {
        let metadata = self.extractor.extract(&source.properties);
        let body = render_blocks(blocks);

        log::debug!(
            "Converted '{}' ({} blocks, {} bytes)",
            source.id,
            blocks.len(),
            body.len()
        );

        RenderedDocument::new(source.id.clone(), metadata, body)
    }
}

/// Produce the persisted text of a post: front matter followed by body.
pub fn assemble(document: &RenderedDocument) -> String {
    let mut out = render_front_matter(&document.metadata);
    out.push_str(&document.body);
    out
}

// ============================================================================
// Tests
// ============================================================================
