//! Platform path resolution.
//!
//! Config and data locations follow the platform conventions exposed by the
//! `dirs` crate (`~/.config` and `~/.local/share` on Linux, `~/Library/...` on
//! macOS, `%APPDATA%` on Windows).

use std::path::PathBuf;

/// Directory name used under the platform config and data roots.
pub const APP_DIR: &str = "pdf-audit";

/// Default config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Directory holding trace files.
///
/// Falls back to the system temp directory when the platform has no data
/// directory (for example a user without a home).
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(std::env::temp_dir).join(APP_DIR)
}

/// Default config file location, if the platform has a config directory.
///
/// ```
/// use pdf_audit::infrastructure::default_config_path;
///
/// if let Some(path) = default_config_path() {
///     assert!(path.ends_with("pdf-audit/config.toml"));
/// }
/// ```
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when no home directory is known,
/// are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR) => {
            home.join(&rest[1..])
        }
        _ => PathBuf::from(path),
    }
}
