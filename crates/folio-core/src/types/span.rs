//! Inline rich-text spans.

use serde::{Deserialize, Serialize};

/// A run of text within a block, carrying its own style flags and an
/// optional hyperlink target.
///
/// Spans have no identity beyond their position in the containing
/// sequence.
///
/// # Examples
///
/// ```
/// use folio_core::InlineSpan;
///
/// let span = InlineSpan::plain("docs").bold().with_link("https://docs.rs");
/// assert!(span.bold);
/// assert_eq!(span.link.as_deref(), Some("https://docs.rs"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    /// Raw text, passed through verbatim.
    pub text: String,
    /// Bold style flag.
    #[serde(default)]
    pub bold: bool,
    /// Italic style flag.
    #[serde(default)]
    pub italic: bool,
    /// Inline code style flag.
    #[serde(default)]
    pub monospace: bool,
    /// Strikethrough style flag.
    #[serde(default)]
    pub strikethrough: bool,
    /// Hyperlink target, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl InlineSpan {
    /// Creates an unstyled, unlinked span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the bold flag.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets the italic flag.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Sets the inline-code flag.
    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    /// Sets the strikethrough flag.
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Attaches a hyperlink target.
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Returns `true` if the span carries no style flags and no link.
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.monospace || self.strikethrough) && self.link.is_none()
    }
}
