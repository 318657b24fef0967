//! Post metadata extraction from document properties.
//!
//! Every field is derived independently through its own fallback chain, and
//! none of them can fail the extraction:
//!
//! | field         | source                                  | fallback          |
//! |---------------|-----------------------------------------|-------------------|
//! | `title`       | `Name` title, then `Title` title        | `""`              |
//! | `date`        | `Published Date` date, then `Date` date | clock "now"       |
//! | `slug`        | `Slug` rich text, normalized            | slug of the title |
//! | `description` | `Description` rich text                 | `""`              |
//! | `tags`        | `Tags` multi-select                     | `[]`              |
//! | `category`    | `Category` select                       | `"Uncategorized"` |
//!
//! A property that exists under the expected name but has a different type
//! is treated as absent. An explicit slug goes through the same
//! normalization as a title, so every slug matches `[a-z0-9-]*`.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use folio_content::MetadataExtractor;
//! use folio_core::{FixedClock, Properties, PropertyValue};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! let extractor = MetadataExtractor::new(clock);
//!
//! let props = Properties::new().with("Name", PropertyValue::Title("My Post!".into()));
//! let meta = extractor.extract(&props);
//!
//! assert_eq!(meta.slug, "my-post");
//! assert_eq!(meta.date, "2024-01-01T00:00:00Z");
//! assert_eq!(meta.category, "Uncategorized");
//! ```

use folio_core::{Clock, PostMetadata, Properties, PropertyValue, SystemClock, slugify};

/// Title property names, in lookup order.
pub const TITLE_PROPERTIES: [&str; 2] = ["Name", "Title"];
/// Publish-date property names, in lookup order.
pub const DATE_PROPERTIES: [&str; 2] = ["Published Date", "Date"];
/// Explicit slug property.
pub const SLUG_PROPERTY: &str = "Slug";
/// Description property.
pub const DESCRIPTION_PROPERTY: &str = "Description";
/// Tags property.
pub const TAGS_PROPERTY: &str = "Tags";
/// Category property.
pub const CATEGORY_PROPERTY: &str = "Category";
/// Category used when none is set.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Derives [`PostMetadata`] from document properties.
///
/// The clock is only consulted when a document has no usable publish date.
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor<C = SystemClock> {
    clock: C,
}

impl<C: Clock> MetadataExtractor<C> {
    /// Creates an extractor using the given clock for the date fallback.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Extract metadata from a property map.
    pub fn extract(&self, properties: &Properties) -> PostMetadata {
        let title = first_non_empty(properties, &TITLE_PROPERTIES, PropertyValue::as_title)
            .unwrap_or_default()
            .to_string();

        let slug = properties
            .get(SLUG_PROPERTY)
            .and_then(PropertyValue::as_rich_text)
            .map(slugify)
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| slugify(&title));

        let description = properties
            .get(DESCRIPTION_PROPERTY)
            .and_then(PropertyValue::as_rich_text)
            .unwrap_or_default()
            .to_string();

        let tags = properties
            .get(TAGS_PROPERTY)
            .and_then(PropertyValue::as_multi_select)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        let category = properties
            .get(CATEGORY_PROPERTY)
            .and_then(PropertyValue::as_select)
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();

        PostMetadata {
            date: self.publish_date(properties),
            title,
            slug,
            description,
            tags,
            category,
        }
    }

    fn publish_date(&self, properties: &Properties) -> String {
        for name in DATE_PROPERTIES {
            let Some(result) = properties.get(name).and_then(PropertyValue::as_date) else {
                continue;
            };
            match result {
                Ok(date) => return date.to_string(),
                Err(e) => {
                    log::warn!("Ignoring property '{name}': {e}");
                }
            }
        }
        self.clock.now_iso8601()
    }
}

/// Extract metadata using the wall clock for the date fallback.
pub fn extract_metadata(properties: &Properties) -> PostMetadata {
    MetadataExtractor::new(SystemClock).extract(properties)
}

fn first_non_empty<'a>(
    properties: &'a Properties,
    names: &[&str],
    accessor: fn(&'a PropertyValue) -> Option<&'a str>,
) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| properties.get(name).and_then(accessor))
        .find(|text| !text.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
