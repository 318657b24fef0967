//! Folio Core: shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all folio crates.
//! It has no internal folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Content model (spans, blocks, properties, posts)
//! - [`clock`]: Injectable time source
//! - [`util`]: Slug and ID utilities

#![doc = include_str!("../README.md")]

pub mod clock;
pub mod error;
pub mod types;
pub mod util;

// Re-export key types at crate root for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use types::{
    Block, InlineSpan, PostMetadata, Properties, PropertyValue, RenderedDocument, SourceDocument,
};

// Convenience re-exports from util
pub use util::ids::{file_stem_from_id, slugify};
