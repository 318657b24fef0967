//! Notion JSON shapes and their conversion into the folio content model.
//!
//! Decoding is deliberately forgiving. Every payload field has a default,
//! properties are decoded one by one, and blocks are decoded one by one,
//! so a single odd value never fails a whole page of results.

use std::collections::HashMap;

use folio_core::{Block, InlineSpan, Properties, PropertyValue, SourceDocument};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Block types this crate knows how to decode.
pub const SUPPORTED_BLOCK_TYPES: [&str; 10] = [
    "paragraph",
    "heading_1",
    "heading_2",
    "heading_3",
    "bulleted_list_item",
    "numbered_list_item",
    "code",
    "quote",
    "image",
    "divider",
];

// ============================================================================
// Pagination envelope
// ============================================================================

/// One page of a paginated list endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> ListResponse<T> {
    /// Cursor for the next page, if there is one.
    pub fn next_page(&self) -> Option<&str> {
        if self.has_more {
            self.next_cursor.as_deref()
        } else {
            None
        }
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Body of a database query.
#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest<'a> {
    pub filter: Value,
    pub sorts: [SortSpec<'a>; 1],
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<&'a str>,
}

/// One sort clause of a database query.
#[derive(Debug, Serialize)]
pub(crate) struct SortSpec<'a> {
    pub property: &'a str,
    pub direction: &'a str,
}

// ============================================================================
// Rich text
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct WireAnnotations {
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    strikethrough: bool,
    #[serde(default)]
    code: bool,
}

#[derive(Debug, Default, Deserialize)]
struct WireRichText {
    #[serde(default)]
    plain_text: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    annotations: WireAnnotations,
}

impl From<WireRichText> for InlineSpan {
    fn from(wire: WireRichText) -> Self {
        InlineSpan {
            text: wire.plain_text,
            bold: wire.annotations.bold,
            italic: wire.annotations.italic,
            monospace: wire.annotations.code,
            strikethrough: wire.annotations.strikethrough,
            link: wire.href.filter(|href| !href.is_empty()),
        }
    }
}

fn spans(rich_text: Vec<WireRichText>) -> Vec<InlineSpan> {
    rich_text.into_iter().map(InlineSpan::from).collect()
}

/// Text of the first span only; later spans of a property are ignored.
fn plain_text(rich_text: Vec<WireRichText>) -> String {
    rich_text
        .into_iter()
        .next()
        .map(|rt| rt.plain_text)
        .unwrap_or_default()
}

// ============================================================================
// Pages and properties
// ============================================================================

/// A database row as returned by the query endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct WirePage {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl WirePage {
    /// Convert into a source document, keeping only modelled property types.
    pub fn into_document(self) -> SourceDocument {
        let properties: Properties = self
            .properties
            .into_iter()
            .filter_map(|(name, raw)| {
                decode_property(&name, raw).map(|value| (name, value))
            })
            .collect();
        SourceDocument::new(self.id, properties)
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireProperty {
    Title {
        #[serde(default)]
        title: Vec<WireRichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<WireRichText>,
    },
    Select {
        #[serde(default)]
        select: Option<WireOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<WireOption>,
    },
    Date {
        #[serde(default)]
        date: Option<WireDate>,
    },
}

#[derive(Debug, Deserialize)]
struct WireOption {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireDate {
    #[serde(default)]
    start: Option<String>,
}

impl WireProperty {
    fn into_value(self) -> Option<PropertyValue> {
        match self {
            WireProperty::Title { title } => Some(PropertyValue::Title(plain_text(title))),
            WireProperty::RichText { rich_text } => {
                Some(PropertyValue::RichText(plain_text(rich_text)))
            }
            WireProperty::Select { select } => select.map(|opt| PropertyValue::Select(opt.name)),
            WireProperty::MultiSelect { multi_select } => Some(PropertyValue::MultiSelect(
                multi_select.into_iter().map(|opt| opt.name).collect(),
            )),
            WireProperty::Date { date } => date
                .and_then(|d| d.start)
                .map(PropertyValue::Date),
        }
    }
}

fn decode_property(name: &str, raw: Value) -> Option<PropertyValue> {
    match serde_json::from_value::<WireProperty>(raw) {
        Ok(property) => property.into_value(),
        Err(e) => {
            tracing::trace!(property = %name, error = %e, "Skipping unmodelled property");
            None
        }
    }
}

// ============================================================================
// Blocks
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct WireText {
    #[serde(default)]
    rich_text: Vec<WireRichText>,
}

#[derive(Debug, Default, Deserialize)]
struct WireCode {
    #[serde(default)]
    rich_text: Vec<WireRichText>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireFileRef {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireImage {
    #[serde(default)]
    file: Option<WireFileRef>,
    #[serde(default)]
    external: Option<WireFileRef>,
    #[serde(default)]
    caption: Vec<WireRichText>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum WireBlock {
    #[serde(rename = "paragraph")]
    Paragraph {
        #[serde(default)]
        paragraph: WireText,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        #[serde(default)]
        heading_1: WireText,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        #[serde(default)]
        heading_2: WireText,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        #[serde(default)]
        heading_3: WireText,
    },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem {
        #[serde(default)]
        bulleted_list_item: WireText,
    },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem {
        #[serde(default)]
        numbered_list_item: WireText,
    },
    #[serde(rename = "code")]
    Code {
        #[serde(default)]
        code: WireCode,
    },
    #[serde(rename = "quote")]
    Quote {
        #[serde(default)]
        quote: WireText,
    },
    #[serde(rename = "image")]
    Image {
        #[serde(default)]
        image: WireImage,
    },
    #[serde(rename = "divider")]
    Divider {},
}

impl From<WireBlock> for Block {
    fn from(wire: WireBlock) -> Self {
        match wire {
            WireBlock::Paragraph { paragraph } => Block::Paragraph {
                spans: spans(paragraph.rich_text),
            },
            WireBlock::Heading1 { heading_1 } => Block::Heading1 {
                spans: spans(heading_1.rich_text),
            },
            WireBlock::Heading2 { heading_2 } => Block::Heading2 {
                spans: spans(heading_2.rich_text),
            },
            WireBlock::Heading3 { heading_3 } => Block::Heading3 {
                spans: spans(heading_3.rich_text),
            },
            WireBlock::BulletedListItem { bulleted_list_item } => Block::BulletItem {
                spans: spans(bulleted_list_item.rich_text),
            },
            WireBlock::NumberedListItem { numbered_list_item } => Block::NumberedItem {
                spans: spans(numbered_list_item.rich_text),
            },
            WireBlock::Code { code } => Block::Code {
                language: code.language.unwrap_or_default(),
                spans: spans(code.rich_text),
            },
            WireBlock::Quote { quote } => Block::Quote {
                spans: spans(quote.rich_text),
            },
            WireBlock::Image { image } => Block::Image {
                file_url: image.file.and_then(|f| f.url),
                external_url: image.external.and_then(|f| f.url),
                caption: spans(image.caption),
            },
            WireBlock::Divider {} => Block::Divider,
        }
    }
}

/// Decode one raw block object.
///
/// Unknown block types, and known ones whose payload cannot be decoded,
/// become [`Block::Unsupported`]. Child blocks are never fetched.
pub(crate) fn decode_block(raw: Value) -> Block {
    let kind = raw
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    if raw.get("has_children").and_then(Value::as_bool) == Some(true) {
        tracing::debug!(block_type = %kind, "Block has children; only top level is rendered");
    }

    if !SUPPORTED_BLOCK_TYPES.contains(&kind.as_str()) {
        tracing::debug!(block_type = %kind, "Unsupported block type");
        return Block::unsupported(kind);
    }

    match serde_json::from_value::<WireBlock>(raw) {
        Ok(block) => block.into(),
        Err(e) => {
            tracing::warn!(block_type = %kind, error = %e, "Malformed block payload; skipping");
            Block::unsupported(kind)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
