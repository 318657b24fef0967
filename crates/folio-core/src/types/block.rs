//! Content blocks.

use serde::{Deserialize, Serialize};

use super::span::InlineSpan;

/// One discrete content unit of a source document.
///
/// The variant set is closed: anything the source sends that is not listed
/// here arrives as [`Block::Unsupported`] and is skipped by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Body text.
    Paragraph {
        /// Inline content.
        spans: Vec<InlineSpan>,
    },
    /// Top-level section heading.
    Heading1 {
        /// Inline content.
        spans: Vec<InlineSpan>,
    },
    /// Second-level heading.
    Heading2 {
        /// Inline content.
        spans: Vec<InlineSpan>,
    },
    /// Third-level heading.
    Heading3 {
        /// Inline content.
        spans: Vec<InlineSpan>,
    },
    /// Unordered list item.
    BulletItem {
        /// Inline content.
        spans: Vec<InlineSpan>,
    },
    /// Ordered list item.
    NumberedItem {
        /// Inline content.
        spans: Vec<InlineSpan>,
    },
    /// Fenced code listing.
    Code {
        /// Language tag for the opening fence; empty when unknown.
        language: String,
        /// Code text as spans.
        spans: Vec<InlineSpan>,
    },
    /// Block quotation.
    Quote {
        /// Inline content.
        spans: Vec<InlineSpan>,
    },
    /// Image, either hosted by the source or linked externally.
    Image {
        /// Source-hosted file URL.
        file_url: Option<String>,
        /// Externally hosted URL.
        external_url: Option<String>,
        /// Caption spans, used as alt text.
        caption: Vec<InlineSpan>,
    },
    /// Horizontal rule.
    Divider,
    /// A block type outside the supported set.
    Unsupported {
        /// The source's type tag, kept for logging.
        kind: String,
    },
}

impl Block {
    /// Creates a paragraph block.
    pub fn paragraph(spans: Vec<InlineSpan>) -> Self {
        Block::Paragraph { spans }
    }

    /// Creates a code block.
    pub fn code(language: impl Into<String>, spans: Vec<InlineSpan>) -> Self {
        Block::Code {
            language: language.into(),
            spans,
        }
    }

    /// Creates an unsupported block for the given source type tag.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Block::Unsupported { kind: kind.into() }
    }

    /// The source-side type tag for this block.
    pub fn kind(&self) -> &str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading1 { .. } => "heading_1",
            Block::Heading2 { .. } => "heading_2",
            Block::Heading3 { .. } => "heading_3",
            Block::BulletItem { .. } => "bulleted_list_item",
            Block::NumberedItem { .. } => "numbered_list_item",
            Block::Code { .. } => "code",
            Block::Quote { .. } => "quote",
            Block::Image { .. } => "image",
            Block::Divider => "divider",
            Block::Unsupported { kind } => kind,
        }
    }

    /// Resolve the URL of an image block.
    ///
    /// Checks the source-hosted location first, then the external one; the
    /// first non-empty value wins. Returns `None` for non-image blocks and
    /// for images with neither location set.
    ///
    /// ```
    /// use folio_core::Block;
    ///
    /// let image = Block::Image {
    ///     file_url: Some(String::new()),
    ///     external_url: Some("https://example.com/a.png".to_string()),
    ///     caption: vec![],
    /// };
    /// assert_eq!(image.image_url(), Some("https://example.com/a.png"));
    /// assert_eq!(Block::Divider.image_url(), None);
    /// ```
    pub fn image_url(&self) -> Option<&str> {
        let Block::Image {
            file_url,
            external_url,
            ..
        } = self
        else {
            return None;
        };

        [file_url, external_url]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .find(|url| !url.is_empty())
    }
}
