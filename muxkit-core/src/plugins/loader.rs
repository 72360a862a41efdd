//! Plugin discovery and dynamic library loading

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use libloading::Library;
use muxkit_plugin_api::{API_VERSION, PLUGIN_SYMBOL, PluginDeclaration};

use super::error::PluginHostError;
use super::host::PluginHost;

/// File name suffix of loadable plugin libraries.
///
/// Matched literally on every platform so existing plugin bundles keep working.
pub const LIBRARY_SUFFIX: &str = ".so";

/// Whether a directory entry name looks like a plugin library.
///
/// The name must be longer than the suffix itself and end in it exactly.
pub fn is_plugin_file_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.len() > LIBRARY_SUFFIX.len() && bytes.ends_with(LIBRARY_SUFFIX.as_bytes())
}

/// Paths in `dir` that should be tried as plugin libraries, sorted by name.
///
/// Only the file name is inspected; directories and broken links named
/// `*.so` are returned too and simply fail to load. An unreadable or missing
/// directory yields no candidates.
pub fn plugin_candidates(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Plugin directory not readable");
            return Vec::new();
        }
    };

    let mut found: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .filter(|name| is_plugin_file_name(name))
        .map(|name| dir.join(name))
        .collect();
    found.sort();
    found
}

/// Open `path` with eager binding, keeping its symbols out of the global namespace
fn open_library(path: &Path) -> Result<Library, libloading::Error> {
    #[cfg(unix)]
    {
        use libloading::os::unix::{Library as UnixLibrary, RTLD_LOCAL, RTLD_NOW};

        // SAFETY: Loading runs the library's initializers. Plugins in the
        // configured directories are trusted code.
        unsafe { UnixLibrary::open(Some(path), RTLD_NOW | RTLD_LOCAL) }.map(Library::from)
    }

    #[cfg(not(unix))]
    {
        // SAFETY: As above.
        unsafe { Library::new(path) }
    }
}

impl PluginHost {
    /// Load one plugin library and register its descriptor.
    ///
    /// Returns the number of leaf descriptors registered. The library stays
    /// loaded for the lifetime of the host.
    pub fn load_plugin(&mut self, path: &Path) -> Result<usize, PluginHostError> {
        let library = open_library(path).map_err(|source| PluginHostError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: The `plugin` symbol is declared by `export_plugin!` as a
        // `PluginDeclaration` static. `api_version` is the first field of a
        // `repr(C)` struct, so it can be read before trusting the rest.
        let declaration = unsafe {
            let symbol = library
                .get::<*const PluginDeclaration>(PLUGIN_SYMBOL)
                .map_err(|source| PluginHostError::MissingSymbol {
                    path: path.to_path_buf(),
                    source,
                })?;
            let declaration: *const PluginDeclaration = *symbol;

            let found = (*declaration).api_version;
            if found != API_VERSION {
                return Err(PluginHostError::ApiVersionMismatch {
                    path: path.to_path_buf(),
                    expected: API_VERSION,
                    found,
                });
            }

            declaration.read()
        };

        let added = self.register(declaration.plugin);
        self.keep_library(library);

        tracing::info!(
            path = %path.display(),
            descriptors = added,
            "Plugin loaded"
        );
        Ok(added)
    }

    /// Load every plugin library in `dir`.
    ///
    /// Per-file failures are logged at debug level and skipped; a missing
    /// directory loads nothing. Returns the number of leaf descriptors added.
    pub fn load_plugin_dir(&mut self, dir: &Path) -> usize {
        let mut added = 0;
        for path in plugin_candidates(dir) {
            match self.load_plugin(&path) {
                Ok(count) => added += count,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Skipping plugin");
                }
            }
        }
        added
    }

    /// Register a plugin library on explicit request.
    ///
    /// Unlike directory scans, failures are returned to the caller with the
    /// dynamic loader's message. `path` must be absolute.
    pub fn register_plugin(&mut self, path: &Path) -> Result<usize, PluginHostError> {
        if !path.is_absolute() {
            return Err(PluginHostError::RelativePath {
                path: path.to_path_buf(),
            });
        }
        self.load_plugin(path)
    }

    /// Register every plugin library in `dir`, exactly as startup does
    pub fn register_plugin_dir(&mut self, dir: &Path) -> usize {
        self.load_plugin_dir(dir)
    }
}
