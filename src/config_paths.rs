//! Where treegrid keeps its files
//!
//! The base directory is `$TREEGRID_CONFIG_DIR` when set. Otherwise it is
//! `$XDG_CONFIG_HOME/treegrid` or `~/.config/treegrid` on Unix and macOS, and
//! `%APPDATA%\treegrid` on Windows. The grid config and the log directory
//! both live under it.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Environment variable that overrides the base directory
pub const CONFIG_DIR_ENV: &str = "TREEGRID_CONFIG_DIR";

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file name; the daily appender adds a `.YYYY-MM-DD` suffix
pub const LOG_FILE_NAME: &str = "treegrid.log";

const APP_DIR: &str = "treegrid";

pub fn config_dir() -> Option<PathBuf> {
    resolve(std::env::var_os(CONFIG_DIR_ENV), platform_base())
}

fn resolve(override_dir: Option<OsString>, base: Option<PathBuf>) -> Option<PathBuf> {
    match override_dir.filter(|dir| !dir.is_empty()) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => base.map(|base| base.join(APP_DIR)),
    }
}

#[cfg(target_os = "windows")]
fn platform_base() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(not(target_os = "windows"))]
fn platform_base() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// The YAML grid config read at startup
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory available"))?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
