//! Exports a composite of two format functions and a wildcard notification

use muxkit_plugin_api::{NotifyEntry, Plugin, export_plugin};

fn reverse(arg: &str) -> String {
    arg.chars().rev().collect()
}

fn upper(arg: &str) -> String {
    arg.to_uppercase()
}

fn ignore(_entry: &NotifyEntry) {}

static PLUGINS: [Plugin; 3] = [
    Plugin::format_function("reverse", reverse),
    Plugin::format_function("upper", upper),
    Plugin::notification(None, ignore),
];

export_plugin!(Plugin::multi(&PLUGINS));
