//! Reading and regenerating the rc file on disk
//!
//! Startup reads `~/.abuse/abuserc`. If it doesn't exist a fresh one holding
//! every default is written in its place, so users have something to edit.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::settings::{Flags, RunMode, Settings, RC_HEADER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no save directory available")]
    NoConfigDir,
}

/// What happened to the rc file during [`load_settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcStatus {
    /// The file was read
    Loaded,
    /// The file didn't exist and a default one was written
    Created,
    /// The file didn't exist and could not be written either
    Missing,
    /// The file exists but reading it failed; defaults are in effect
    Unreadable,
}

/// Settings read at startup, with the flags they resolve to
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub flags: Flags,
    pub status: RcStatus,
}

/// Path of the rc file in the save directory
pub fn default_rc_path() -> Result<PathBuf, ConfigError> {
    crate::config_paths::rc_file().ok_or(ConfigError::NoConfigDir)
}

/// Parse the rc file at `path` into `settings`
///
/// Returns `Ok(false)` if the file could not be opened. A failure while
/// reading an opened file is an error.
pub fn read_rc(path: &Path, settings: &mut Settings, mode: RunMode) -> Result<bool, ConfigError> {
    let mut parser = settings.parser();
    parser.set_default_section(mode.section_name());
    parser.parse_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an rc file holding every default value
///
/// Creates the parent directory if it doesn't exist.
pub fn write_default_rc(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut settings = Settings::new();
    let mut out = BufWriter::new(File::create(path).map_err(write_error)?);
    settings
        .parser()
        .write_defaults(&mut out, RC_HEADER)
        .map_err(write_error)?;
    out.flush().map_err(write_error)?;

    tracing::info!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Load settings at startup
///
/// Never fails: problems are logged and the defaults stay in effect.
pub fn load_settings(path: &Path, mode: RunMode) -> LoadedSettings {
    let mut settings = Settings::new();

    let status = match read_rc(path, &mut settings, mode) {
        Ok(true) => {
            tracing::info!("Loaded configuration from {}", path.display());
            RcStatus::Loaded
        }
        Ok(false) => {
            tracing::debug!("No configuration at {}, generating one", path.display());
            match write_default_rc(path) {
                Ok(()) => RcStatus::Created,
                Err(e) => {
                    tracing::warn!("Unable to create default configuration: {}", e);
                    RcStatus::Missing
                }
            }
        }
        Err(e) => {
            tracing::warn!("{} (using defaults)", e);
            settings = Settings::new();
            RcStatus::Unreadable
        }
    };

    let flags = settings.flags(mode);
    LoadedSettings {
        settings,
        flags,
        status,
    }
}
