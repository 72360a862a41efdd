//! PluginHost - the process-wide plugin registry context

use std::path::PathBuf;

use libloading::Library;
use muxkit_plugin_api::{NotifyEntry, Plugin};

use super::store::PluginStore;

/// Configuration for PluginHost
#[derive(Debug, Clone)]
pub struct PluginHostConfig {
    /// System-wide plugin directory (/etc/muxkit/plugins)
    pub system_plugin_dir: Option<PathBuf>,
    /// Per-user plugin directory (~/.muxkit/plugins)
    pub user_plugin_dir: Option<PathBuf>,
    /// Further directories, loaded after the user directory
    pub extra_plugin_dirs: Vec<PathBuf>,
}

impl Default for PluginHostConfig {
    fn default() -> Self {
        Self {
            system_plugin_dir: Some(muxkit_paths::system_plugin_dir()),
            user_plugin_dir: muxkit_paths::user_plugin_dir(),
            extra_plugin_dirs: Vec::new(),
        }
    }
}

impl PluginHostConfig {
    /// Directories to scan, in load order
    pub fn plugin_dirs(&self) -> Vec<PathBuf> {
        self.system_plugin_dir
            .iter()
            .chain(self.user_plugin_dir.iter())
            .chain(self.extra_plugin_dirs.iter())
            .cloned()
            .collect()
    }
}

/// Owns the plugin store and every library whose descriptors it holds.
///
/// Create one per process and hand it to whatever needs to register or
/// dispatch. Registration needs `&mut self`, dispatch only `&self`.
#[derive(Debug)]
pub struct PluginHost {
    store: PluginStore,
    /// Declared after `store` so descriptors are dropped before their libraries
    libraries: Vec<Library>,
}

impl PluginHost {
    /// Create a host with an initialized, empty store
    pub fn new() -> Self {
        let mut store = PluginStore::default();
        store.init();
        Self {
            store,
            libraries: Vec::new(),
        }
    }

    /// Create a host and load the configured plugin directories.
    ///
    /// The system directory is loaded first, then the user directory, then any
    /// extra directories. Earlier registrations take precedence for
    /// single-valued dispatch, so system plugins win over user plugins of
    /// the same name.
    pub fn init(config: &PluginHostConfig) -> Self {
        let mut host = Self::new();
        for dir in config.plugin_dirs() {
            let added = host.load_plugin_dir(&dir);
            tracing::debug!(dir = %dir.display(), descriptors = added, "Plugin directory scanned");
        }
        tracing::info!(
            descriptors = host.store.len(),
            libraries = host.libraries.len(),
            "Plugins initialized"
        );
        host
    }

    /// Register a descriptor provided by the host itself or by a loaded library
    pub fn register(&mut self, plugin: Plugin) -> usize {
        self.store.register(plugin)
    }

    /// Read access to the registered descriptors
    pub fn store(&self) -> &PluginStore {
        &self.store
    }

    /// Number of plugin libraries kept loaded
    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    /// Call the format function `name`, or return "" when none is registered
    pub fn call_function(&self, name: &str, arg: &str) -> String {
        self.store.call_function(name, arg)
    }

    /// Deliver a host event to the matching notification plugins
    pub fn notify(&self, entry: &NotifyEntry) {
        self.store.notify(entry)
    }

    /// Comma-separated display names of all registered descriptors
    pub fn plugin_list(&self) -> String {
        self.store.plugin_list()
    }

    pub(super) fn keep_library(&mut self, library: Library) {
        self.libraries.push(library);
    }
}

impl Default for PluginHost {
    fn default() -> Self {
        Self::new()
    }
}
