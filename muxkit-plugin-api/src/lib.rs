//! muxkit-plugin-api - Plugin API for the muxkit plugin registry
//!
//! This crate provides the descriptor types shared between the muxkit host and
//! the plugin libraries it loads. A plugin is a native dynamic library (`.so`)
//! that exports exactly one symbol, `plugin`, holding a [`PluginDeclaration`].
//!
//! A declaration wraps one [`Plugin`] descriptor. A descriptor is one of four
//! extension points, or a [`Plugin::Multi`] composite that lets a single
//! library register several of them at once.
//!
//! # Example
//!
//! ```ignore
//! use muxkit_plugin_api::{export_plugin, Plugin};
//!
//! fn reverse(arg: &str) -> String {
//!     arg.chars().rev().collect()
//! }
//!
//! export_plugin!(Plugin::format_function("reverse", reverse));
//! ```

pub mod command;
pub mod context;
pub mod types;

pub use command::{ArgBounds, CommandEntry, CommandExecFn, CommandReturn};
pub use context::{CommandArgs, CommandContext, FormatContext, NotifyEntry};
pub use types::*;

/// Current plugin API version. Plugins must match this exactly.
/// This is checked when loading plugins to ensure compatibility.
pub const API_VERSION: u32 = 1;

/// Name of the symbol every plugin library exports.
pub const PLUGIN_SYMBOL: &[u8] = b"plugin\0";

/// The value a plugin library exports under [`PLUGIN_SYMBOL`].
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct PluginDeclaration {
    /// API version the plugin was built against
    pub api_version: u32,
    /// Root descriptor, possibly a composite
    pub plugin: Plugin,
}

impl PluginDeclaration {
    /// Declare a plugin against the current [`API_VERSION`].
    pub const fn new(plugin: Plugin) -> Self {
        Self {
            api_version: API_VERSION,
            plugin,
        }
    }
}

/// Export a plugin descriptor for dynamic loading.
///
/// Expands to the `plugin` static that the muxkit loader resolves. The
/// argument must be a constant expression of type [`Plugin`].
///
/// # Usage
///
/// ```ignore
/// muxkit_plugin_api::export_plugin!(Plugin::multi(&[
///     Plugin::format_function("reverse", reverse),
///     Plugin::format_function("trim", trim),
/// ]));
/// ```
#[macro_export]
macro_rules! export_plugin {
    ($plugin:expr) => {
        #[allow(non_upper_case_globals)]
        #[unsafe(no_mangle)]
        pub static plugin: $crate::PluginDeclaration = $crate::PluginDeclaration::new($plugin);
    };
}
