//! Utility modules for identifier computation.
//!
//! # Modules
//!
//! - [`ids`]: Slug normalization and file-stem computation

pub mod ids;
