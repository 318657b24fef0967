//! Configuration for the `folio` binary.
//!
//! A single TOML file with a `[notion]` and an `[output]` section. Missing
//! keys take their defaults; a few environment variables override the file.

use std::path::{Path, PathBuf};

use folio_core::Error;
use folio_notion::NotionSettings;
use serde::{Deserialize, Serialize};

/// Overrides `notion.token`.
pub const ENV_NOTION_TOKEN: &str = "NOTION_TOKEN";

/// Overrides `notion.database_id`.
pub const ENV_NOTION_DATABASE_ID: &str = "NOTION_DATABASE_ID";

/// Overrides `output.dir`.
pub const ENV_OUTPUT_DIR: &str = "FOLIO_OUTPUT_DIR";

/// Default directory posts are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "content/posts";

const TEMPLATE_HEADER: &str = "\
# folio configuration
#
# notion.token and notion.database_id are required to sync. They can also
# come from NOTION_TOKEN and NOTION_DATABASE_ID; FOLIO_OUTPUT_DIR overrides
# output.dir.

";

// ============================================================================
// FolioConfig
// ============================================================================

/// Where rendered posts go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, created on demand.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Notion connection and query settings.
    pub notion: NotionSettings,
    /// Output settings.
    pub output: OutputConfig,
}

impl FolioConfig {
    /// `<config dir>/folio/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// The explicit path when given, else the default path.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load from the resolved path.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    /// Environment overrides are applied in both cases.
    pub fn load(explicit: Option<&str>) -> folio_core::Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Self::from_file(&path)?
            }
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            _ => {
                tracing::debug!("No config file found; using defaults");
                Self::default()
            }
        };
        config.apply_env();
        Ok(config)
    }

    /// The starter file written by `folio config init`: every setting at its
    /// default, under a short explanatory header.
    pub fn template() -> folio_core::Result<String> {
        Ok(format!("{TEMPLATE_HEADER}{}", Self::default().to_toml_string()?))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> folio_core::Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> folio_core::Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> folio_core::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`; empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(token) = lookup(ENV_NOTION_TOKEN) {
            self.notion.token = token;
        }
        if let Some(database_id) = lookup(ENV_NOTION_DATABASE_ID) {
            self.notion.database_id = database_id;
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.output.dir = PathBuf::from(dir);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
