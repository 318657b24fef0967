//! Markdown rendering and front matter.
//!
//! - [`inline`]: Rich-text spans to inline markdown
//! - [`blocks`]: Content blocks to a markdown body
//! - [`frontmatter`]: YAML front matter writing

pub mod blocks;
pub mod frontmatter;
pub mod inline;

pub use blocks::{render_block, render_blocks};
pub use frontmatter::render_front_matter;
pub use inline::{render_rich_text, render_span};
