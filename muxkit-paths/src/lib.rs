//! Plugin and config directory locations for muxkit.
//!
//! Plugin directories are fixed paths so that plugin bundles can be installed
//! without any configuration: one system-wide directory, and one under the
//! invoking user's home directory when that can be resolved.

use std::path::PathBuf;

/// System-wide plugin directory.
pub const SYSTEM_PLUGIN_DIR: &str = "/etc/muxkit/plugins";

/// Per-user plugin directory, relative to the home directory.
pub const USER_PLUGIN_SUBDIR: &str = ".muxkit/plugins";

/// Get the system-wide plugin directory.
pub fn system_plugin_dir() -> PathBuf {
    PathBuf::from(SYSTEM_PLUGIN_DIR)
}

/// Get the per-user plugin directory.
///
/// Returns `~/.muxkit/plugins`, or `None` when no home directory is known.
///
/// # Examples
///
/// ```
/// use muxkit_paths::user_plugin_dir;
///
/// if let Some(dir) = user_plugin_dir() {
///     assert!(dir.ends_with(".muxkit/plugins"));
/// }
/// ```
pub fn user_plugin_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_PLUGIN_SUBDIR))
}

/// Get the muxkit config directory.
///
/// Returns `$XDG_CONFIG_HOME/muxkit` if set, otherwise `~/.config/muxkit`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("muxkit")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/muxkit")
    } else {
        PathBuf::from(".config/muxkit")
    }
}
