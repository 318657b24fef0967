//! Content conversion for folio.
//!
//! Turns source documents into static-site posts:
//!
//! - [`markdown`]: inline, block, and front-matter rendering
//! - [`metadata`]: property map to [`PostMetadata`](folio_core::PostMetadata)
//! - [`assembler`]: one source document plus its blocks to a post
//!
//! Everything here is synchronous and pure apart from the clock used for
//! the date fallback, so documents can be converted independently of each
//! other.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::render_blocks;
//! use folio_core::{Block, InlineSpan};
//!
//! let body = render_blocks(&[
//!     Block::BulletItem { spans: vec![InlineSpan::plain("fast").bold()] },
//!     Block::Divider,
//! ]);
//! assert_eq!(body, "- **fast**\n\n---\n");
//! ```

#![doc = include_str!("../README.md")]

pub mod assembler;
pub mod markdown;
pub mod metadata;

mod proptests;

// Re-export commonly used items
pub use assembler::{assemble, DocumentConverter};
pub use markdown::{
    render_block, render_blocks, render_front_matter, render_rich_text, render_span,
};
pub use metadata::{extract_metadata, MetadataExtractor};
