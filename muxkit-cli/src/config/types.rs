use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use muxkit_core::PluginHostConfig;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawMuxkitConfig {
    #[serde(default)]
    pub plugins: RawPluginsConfig,
}

/// Plugin config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPluginsConfig {
    /// Override for the system-wide plugin directory
    pub system_dir: Option<PathBuf>,

    /// Override for the per-user plugin directory
    pub user_dir: Option<PathBuf>,

    /// Directories loaded after the user directory
    pub extra_dirs: Option<Vec<PathBuf>>,

    /// Scan the system-wide directory at startup
    pub load_system: Option<bool>,

    /// Scan the per-user directory at startup
    pub load_user: Option<bool>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MuxkitConfig {
    #[serde(default)]
    pub plugins: PluginsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginsConfig {
    /// System-wide plugin directory
    pub system_dir: PathBuf,

    /// Per-user plugin directory, absent when no home directory is known
    pub user_dir: Option<PathBuf>,

    /// Directories loaded after the user directory
    #[serde(default)]
    pub extra_dirs: Vec<PathBuf>,

    /// Scan the system-wide directory at startup
    pub load_system: bool,

    /// Scan the per-user directory at startup
    pub load_user: bool,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            system_dir: muxkit_paths::system_plugin_dir(),
            user_dir: muxkit_paths::user_plugin_dir(),
            extra_dirs: Vec::new(),
            load_system: true,
            load_user: true,
        }
    }
}

impl PluginsConfig {
    /// Host configuration for these settings
    pub fn host_config(&self) -> PluginHostConfig {
        PluginHostConfig {
            system_plugin_dir: self.load_system.then(|| self.system_dir.clone()),
            user_plugin_dir: self.user_dir.clone().filter(|_| self.load_user),
            extra_plugin_dirs: self.extra_dirs.clone(),
        }
    }
}
