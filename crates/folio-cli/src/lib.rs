//! # folio-cli
//!
//! The `folio` command: syncs published Notion pages into a Hugo content
//! directory.
//!
//! - [`sync::Syncer`]: list, convert, and write every published post
//! - [`writer::PostWriter`]: persists assembled posts
//! - [`config::FolioConfig`]: TOML configuration with env overrides
//! - [`config_handlers`]: `folio config path` and `folio config init`

#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod sync;
pub mod writer;

pub use config::FolioConfig;
pub use error::{Error, Result};
pub use sync::{SyncFailure, SyncReport, Syncer};
pub use writer::PostWriter;
