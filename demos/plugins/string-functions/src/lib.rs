//! String Functions - an example muxkit plugin
//!
//! This plugin demonstrates:
//! - Exporting a descriptor with the `export_plugin!` macro
//! - Registering several extension points from one library with `Plugin::multi`
//! - Format functions, usable as `#{f:reverse:...}` and `#{f:trim:...}`
//!
//! ## Building
//!
//! ```bash
//! cargo build --release
//! ```
//!
//! ## Installing
//!
//! ```bash
//! mkdir -p ~/.muxkit/plugins
//! cp target/release/libstring_functions.so ~/.muxkit/plugins/
//! muxkit plugin call reverse abc
//! ```

use muxkit_plugin_api::{NotifyEntry, Plugin, export_plugin};

/// Reverse the argument, character by character.
fn reverse(arg: &str) -> String {
    arg.chars().rev().collect()
}

/// Strip leading and trailing whitespace.
fn trim(arg: &str) -> String {
    arg.trim().to_string()
}

/// Report renamed windows on stderr.
fn window_renamed(entry: &NotifyEntry) {
    if let Some(window) = &entry.window {
        eprintln!("window renamed: {window}");
    }
}

static PLUGINS: [Plugin; 3] = [
    Plugin::format_function("reverse", reverse),
    Plugin::format_function("trim", trim),
    Plugin::notification(Some("window-renamed"), window_renamed),
];

export_plugin!(Plugin::multi(&PLUGINS));
