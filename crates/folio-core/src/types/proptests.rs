//! Property-based tests for core types and slug normalization.
