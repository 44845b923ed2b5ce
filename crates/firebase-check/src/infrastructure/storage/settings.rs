//! TOML settings file persistence.
//!
//! The settings file is optional.  When the user does not name one with
//! `--config`, the tool looks for [`SETTINGS_FILE_NAME`] in the base
//! directory; a missing file means [`Settings::default()`].  A file named
//! with `--config` goes through [`load_required_settings`] and must exist.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::settings::Settings;

/// File name looked up in the base directory when `--config` is not given.
pub const SETTINGS_FILE_NAME: &str = "firebase-check.toml";

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file system I/O error other than "not found" occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Path of the implicit settings file under `base_dir`.
pub fn default_settings_path(base_dir: &Path) -> PathBuf {
    base_dir.join(SETTINGS_FILE_NAME)
}

/// Loads settings from `path`, returning `Settings::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(source) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads settings from a file the user named explicitly.
///
/// Unlike [`load_settings`], a missing file is an error.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for any file-system error, including "not
/// found", and [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_required_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
