//! Content model for folio.
//!
//! Everything here is constructed once from remote data and consumed
//! read-only by the renderers.

mod block;
mod post;
mod property;
mod proptests;
mod span;

pub use block::Block;
pub use post::{PostMetadata, RenderedDocument, SourceDocument};
pub use property::{Properties, PropertyValue};
pub use span::InlineSpan;
