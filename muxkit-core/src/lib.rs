//! muxkit-core: Core library for the muxkit plugin registry
//!
//! This crate discovers, loads, stores and dispatches native plugins:
//!
//! - **Store** - [`PluginStore`] keeps leaf descriptors in registration order
//! - **Loader** - [`PluginHost::load_plugin`] and [`PluginHost::load_plugin_dir`]
//!   open `.so` files and register the `plugin` symbol they export
//! - **Dispatcher** - [`PluginStore::call_function`], [`PluginStore::notify`]
//!   and the kind-indexed lookups used by [`CommandTable`] and [`FormatTable`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 PluginHost                   │
//! │  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │   PluginStore    │  │  Vec<Library>    │  │
//! │  │ (leaf plugins in │  │ (kept loaded for │  │
//! │  │  registration    │  │  the host's      │  │
//! │  │  order)          │  │  lifetime)       │  │
//! │  └──────────────────┘  └──────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```

pub mod plugins;

// Re-export key types for convenience
pub use plugins::{
    CommandError, CommandTable, FormatTable, PluginHost, PluginHostConfig, PluginHostError,
    PluginStore,
};
