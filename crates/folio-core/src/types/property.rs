//! Typed document properties.
//!
//! The source exposes a small typed property system. Only the types that
//! feed post metadata are modelled; everything else is dropped at the
//! retrieval boundary.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One property value, tagged with its source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    /// The document's title property.
    Title(String),
    /// Free-form text.
    RichText(String),
    /// A single option name.
    Select(String),
    /// Option names, in source order.
    MultiSelect(Vec<String>),
    /// An ISO-8601 date or datetime string.
    Date(String),
}

impl PropertyValue {
    /// Text of a [`PropertyValue::Title`].
    pub fn as_title(&self) -> Option<&str> {
        match self {
            Self::Title(text) => Some(text),
            _ => None,
        }
    }

    /// Text of a [`PropertyValue::RichText`].
    pub fn as_rich_text(&self) -> Option<&str> {
        match self {
            Self::RichText(text) => Some(text),
            _ => None,
        }
    }

    /// Name of a [`PropertyValue::Select`].
    pub fn as_select(&self) -> Option<&str> {
        match self {
            Self::Select(name) => Some(name),
            _ => None,
        }
    }

    /// Names of a [`PropertyValue::MultiSelect`].
    pub fn as_multi_select(&self) -> Option<&[String]> {
        match self {
            Self::MultiSelect(names) => Some(names),
            _ => None,
        }
    }

    /// Validated date string of a [`PropertyValue::Date`].
    ///
    /// Returns `None` for other variants and `Some(Err(_))` when the stored
    /// string is not a recognisable ISO-8601 date or datetime.
    ///
    /// ```
    /// use folio_core::PropertyValue;
    ///
    /// let date = PropertyValue::Date("2024-05-01".to_string());
    /// assert_eq!(date.as_date().unwrap().unwrap(), "2024-05-01");
    ///
    /// let bad = PropertyValue::Date("soon".to_string());
    /// assert!(bad.as_date().unwrap().is_err());
    /// ```
    pub fn as_date(&self) -> Option<Result<&str>> {
        match self {
            Self::Date(raw) => Some(validate_iso8601(raw)),
            _ => None,
        }
    }
}

/// Accepts RFC 3339 datetimes, offset-less datetimes, and plain dates.
fn validate_iso8601(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    let ok = DateTime::parse_from_rfc3339(trimmed).is_ok()
        || NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok();

    if ok {
        Ok(trimmed)
    } else {
        Err(Error::invalid_date(raw))
    }
}

/// A document's properties keyed by (case-sensitive) property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(HashMap<String, PropertyValue>);

impl Properties {
    /// Creates an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a property, builder style.
    pub fn with(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces a property.
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.0.insert(name.into(), value);
    }

    /// Looks up a property by exact name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, PropertyValue)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
