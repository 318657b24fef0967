//! Slug and file-stem utilities.
//!
//! Provides the normalization that turns a post title into a stable,
//! URL-safe identifier, and the fallback stem used when a post has no
//! usable slug at all.

use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

/// Derive a slug from arbitrary text.
///
/// Performs the following transformations:
/// 1. Converts to lowercase
/// 2. Replaces every maximal run of characters outside `[a-z0-9]` with a
///    single hyphen
/// 3. Trims leading/trailing hyphens
///
/// Non-ASCII letters fall outside `[a-z0-9]` and are therefore replaced.
/// Text with no ASCII alphanumerics yields an empty slug.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::slugify;
///
/// assert_eq!(slugify("My Post!"), "my-post");
/// assert_eq!(slugify("  Rust & WebAssembly: 2024  "), "rust-webassembly-2024");
/// assert_eq!(slugify("already-a-slug"), "already-a-slug");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Compute a file stem from a remote document ID.
///
/// Used when a document has neither a title nor an explicit slug. Keeps
/// only ASCII alphanumerics, lowercased, so dashed and undashed forms of
/// the same ID produce the same stem.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::file_stem_from_id;
///
/// assert_eq!(
///     file_stem_from_id("1A2B3C4D-0000-1111-2222-333344445555"),
///     "1a2b3c4d000011112222333344445555"
/// );
/// ```
pub fn file_stem_from_id(id: &str) -> String {
    id.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
