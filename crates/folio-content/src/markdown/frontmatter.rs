//! Front matter for generated posts.
//!
//! Front matter is a YAML header at the start of a markdown file, delimited
//! by `---`. Generated posts carry a fixed set of fields in a fixed order:
//!
//! ```markdown
//! ---
//! title: "My Post"
//! date: 2024-01-15
//! description: "What it is about"
//! tags: ["rust", "markdown"]
//! categories: ["Engineering"]
//! draft: false
//! ---
//! ```
//!
//! Every string is written as a YAML double-quoted scalar. Line breaks,
//! tabs, and other non-printable characters are escaped, so a value can
//! never span lines or close the header early.

use std::fmt::Write as _;

use folio_core::PostMetadata;

const DELIMITER: &str = "---";

/// Render the front-matter header for a post, delimiters included.
///
/// The date is written bare so YAML readers see a timestamp. The output
/// always ends with a newline after the closing delimiter.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::frontmatter::render_front_matter;
/// use folio_core::PostMetadata;
///
/// let meta = PostMetadata {
///     title: "Hello".to_string(),
///     date: "2024-01-15".to_string(),
///     slug: "hello".to_string(),
///     description: "two\nlines".to_string(),
///     tags: vec!["a".to_string(), "b".to_string()],
///     category: "Notes".to_string(),
/// };
///
/// assert_eq!(
///     render_front_matter(&meta),
///     "---\ntitle: \"Hello\"\ndate: 2024-01-15\ndescription: \"two\\nlines\"\n\
///      tags: [\"a\", \"b\"]\ncategories: [\"Notes\"]\ndraft: false\n---\n"
/// );
/// ```
pub fn render_front_matter(metadata: &PostMetadata) -> String {
    let tags = quoted_list(metadata.tags.iter().map(String::as_str));
    let categories = quoted_list(std::iter::once(metadata.category.as_str()));

    format!(
        "{DELIMITER}\n\
         title: {title}\n\
         date: {date}\n\
         description: {description}\n\
         tags: {tags}\n\
         categories: {categories}\n\
         draft: false\n\
         {DELIMITER}\n",
        title = quoted(&metadata.title),
        date = metadata.date,
        description = quoted(&metadata.description),
    )
}

/// A YAML double-quoted scalar holding `value`.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Unicode line/paragraph separators and BOM count as breaks or
            // markers for some readers.
            '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}' => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn quoted_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<String> = values.map(quoted).collect();
    format!("[{}]", items.join(", "))
}

// ============================================================================
// Tests
// ============================================================================
