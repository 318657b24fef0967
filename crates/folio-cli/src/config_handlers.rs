//! Handlers for the `folio config` subcommands.
//!
//! `path` shows where the configuration is read from; `init` writes the
//! starter file from [`FolioConfig::template`].

use std::path::{Path, PathBuf};

use folio_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::FolioConfig;

/// Run a config subcommand. `config_path` is the global `--config` value.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = resolved_path(config_path)?;
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `folio config init` to create it)");
            }
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = resolved_path(file.as_deref().or(config_path))?;
            write_template(&path, force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

fn resolved_path(explicit: Option<&str>) -> Result<PathBuf> {
    FolioConfig::resolve_config_path(explicit).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })
}

/// Write the starter config to `path`, creating parent directories.
///
/// An existing file is only replaced when `force` is set.
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let template = FolioConfig::template()?;
    std::fs::write(path, template).map_err(|e| Error::io_with_path(e, path))?;
    tracing::debug!(path = %path.display(), "Wrote config template");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
