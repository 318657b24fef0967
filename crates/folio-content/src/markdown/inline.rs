//! Inline rich-text rendering.
//!
//! Turns [`InlineSpan`]s into markdown. Styles wrap textually in a fixed
//! order (bold, italic, code, strikethrough, link), each wrapping the
//! result of the previous step:
//!
//! ```rust
//! use folio_content::markdown::inline::{render_rich_text, render_span};
//! use folio_core::InlineSpan;
//!
//! assert_eq!(render_span(&InlineSpan::plain("hi").bold().italic()), "***hi***");
//!
//! let spans = vec![InlineSpan::plain("Hello "), InlineSpan::plain("world").italic()];
//! assert_eq!(render_rich_text(&spans), "Hello *world*");
//! ```
//!
//! Text is passed through verbatim; markdown-significant characters are not
//! escaped.

use folio_core::InlineSpan;

/// Render one span to markdown.
///
/// Empty text still receives its wrappers, so an empty bold span renders as
/// `****`. Callers filter empty output where it matters.
pub fn render_span(span: &InlineSpan) -> String {
    let mut text = span.text.clone();

    if span.bold {
        text = format!("**{text}**");
    }
    if span.italic {
        text = format!("*{text}*");
    }
    if span.monospace {
        text = format!("`{text}`");
    }
    if span.strikethrough {
        text = format!("~~{text}~~");
    }
    if let Some(href) = &span.link {
        text = format!("[{text}]({href})");
    }

    text
}

/// Render a sequence of spans, concatenated in order with no separators.
pub fn render_rich_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(render_span).collect()
}

// ============================================================================
// Tests
// ============================================================================
