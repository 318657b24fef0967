//! Block-level markdown rendering.
//!
//! Each [`Block`] maps to at most one markdown fragment. Fragments end in a
//! line break and are joined with another, so consecutive blocks are
//! separated by one blank line.
//!
//! | block         | fragment                         |
//! |---------------|----------------------------------|
//! | paragraph     | `text` (skipped when blank)      |
//! | heading 1/2/3 | `## ` / `### ` / `#### ` + text  |
//! | bullet item   | `- text`                         |
//! | numbered item | `1. text`                        |
//! | code          | fenced block tagged by language  |
//! | quote         | `> text`                         |
//! | image         | `![caption or "Image"](url)`     |
//! | divider       | `---`                            |
//! | unsupported   | nothing                          |
//!
//! Headings are shifted down one level so the page title stays the only
//! `#` heading on the rendered page.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::blocks::render_blocks;
//! use folio_core::{Block, InlineSpan};
//!
//! let blocks = vec![
//!     Block::Heading1 { spans: vec![InlineSpan::plain("Intro")] },
//!     Block::paragraph(vec![InlineSpan::plain("Hello "), InlineSpan::plain("world").italic()]),
//! ];
//! assert_eq!(render_blocks(&blocks), "## Intro\n\nHello *world*\n");
//! ```

use folio_core::Block;

use super::inline::render_rich_text;

/// Alt text for images without a caption.
pub const DEFAULT_IMAGE_ALT: &str = "Image";

/// Render one block to a markdown fragment.
///
/// Returns `None` for blocks that produce no output: blank paragraphs,
/// images without a URL, and unsupported block types.
pub fn render_block(block: &Block) -> Option<String> {
    match block {
        Block::Paragraph { spans } => {
            let text = render_rich_text(spans);
            if text.trim().is_empty() {
                None
            } else {
                Some(format!("{text}\n"))
            }
        }
        Block::Heading1 { spans } => Some(format!("## {}\n", render_rich_text(spans))),
        Block::Heading2 { spans } => Some(format!("### {}\n", render_rich_text(spans))),
        Block::Heading3 { spans } => Some(format!("#### {}\n", render_rich_text(spans))),
        Block::BulletItem { spans } => Some(format!("- {}\n", render_rich_text(spans))),
        // Always `1.`; markdown renderers number the list themselves.
        Block::NumberedItem { spans } => Some(format!("1. {}\n", render_rich_text(spans))),
        Block::Code { language, spans } => Some(format!(
            "```{language}\n{}\n```\n",
            render_rich_text(spans)
        )),
        Block::Quote { spans } => Some(format!("> {}\n", render_rich_text(spans))),
        Block::Image { caption, .. } => {
            let url = block.image_url()?;
            let caption = render_rich_text(caption);
            let alt = if caption.is_empty() {
                DEFAULT_IMAGE_ALT
            } else {
                caption.as_str()
            };
            Some(format!("![{alt}]({url})\n"))
        }
        Block::Divider => Some("---\n".to_string()),
        Block::Unsupported { kind } => {
            log::debug!("Skipping unsupported block type '{kind}'");
            None
        }
    }
}

/// Render a document's blocks, in order, into one markdown body.
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================
