//! Centralized save-directory paths
//!
//! The rc file and logs live under the save directory:
//! - Unix/macOS: `~/.abuse/`
//! - Windows: `%APPDATA%\Abuse\`
//!
//! `ABUSE_SAVE_DIR` overrides the location on every platform.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable that overrides the save directory
pub const SAVE_DIR_ENV: &str = "ABUSE_SAVE_DIR";

const RC_FILE: &str = "abuserc";

/// Base directory for saves and configuration
///
/// Unix/macOS: `~/.abuse`
///
/// Windows: `%APPDATA%\Abuse`
pub fn save_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(SAVE_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
            .map(|appdata| appdata.join("Abuse"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        dirs::home_dir().map(|home| home.join(".abuse"))
    }
}

/// `~/.abuse/abuserc`
pub fn rc_file() -> Option<PathBuf> {
    save_dir().map(|dir| dir.join(RC_FILE))
}

/// `~/.abuse/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    save_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the save dir exists, returning it
pub fn ensure_save_dir() -> Result<PathBuf, String> {
    let dir = save_dir().ok_or_else(|| "No save directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_save_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
