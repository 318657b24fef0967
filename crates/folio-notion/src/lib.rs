//! # folio-notion
//!
//! Notion API source for folio.
//!
//! - [`NotionClient`]: queries a database for published pages and lists
//!   their blocks, following pagination and retrying transient failures
//! - [`DocumentSource`]: the trait the sync pipeline consumes
//! - Wire decoding from Notion JSON into the `folio_core` content model

#![doc = include_str!("../README.md")]

pub mod client;
pub mod error;
pub mod source;
mod wire;

pub use client::{NotionClient, NotionSettings};
pub use error::{Error, Result};
pub use source::DocumentSource;
pub use wire::SUPPORTED_BLOCK_TYPES;
