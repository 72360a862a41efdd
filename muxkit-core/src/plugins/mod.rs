//! Plugin system for muxkit
//!
//! This module provides the infrastructure for loading and dispatching plugins:
//!
//! - [`PluginStore`]: Ordered storage of registered descriptors
//! - [`PluginHost`]: Owns the store and the loaded libraries, and loads plugins
//! - [`CommandTable`] / [`FormatTable`]: Kind-indexed views for host subsystems
//! - [`PluginHostError`]: Error types for explicit plugin loads
//!
//! # Plugin Discovery
//!
//! Plugins are discovered from two directories, in this order:
//! 1. System plugins: `/etc/muxkit/plugins/`
//! 2. User plugins: `~/.muxkit/plugins/`
//!
//! Every entry whose name ends in `.so` is tried. Files that fail to load are
//! skipped silently.
//!
//! # Example
//!
//! ```ignore
//! use muxkit_core::plugins::{PluginHost, PluginHostConfig};
//! use muxkit_plugin_api::NotifyEntry;
//!
//! let host = PluginHost::init(&PluginHostConfig::default());
//!
//! let reversed = host.call_function("reverse", "abc");
//! host.notify(&NotifyEntry::new("window-renamed"));
//! println!("{}", host.plugin_list());
//! ```

mod commands;
mod dispatch;
mod error;
mod formats;
mod host;
mod loader;
mod store;

pub use commands::CommandTable;
pub use error::{CommandError, PluginHostError};
pub use formats::FormatTable;
pub use host::{PluginHost, PluginHostConfig};
pub use loader::{LIBRARY_SUFFIX, is_plugin_file_name, plugin_candidates};
pub use store::{INITIAL_CAPACITY, MAX_CAPACITY, PluginStore};
