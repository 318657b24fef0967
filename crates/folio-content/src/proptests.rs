//! Property-based tests for rendering and metadata extraction.
