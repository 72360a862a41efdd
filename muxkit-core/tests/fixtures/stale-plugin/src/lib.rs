//! Exports a declaration built against a newer plugin API

use muxkit_plugin_api::{API_VERSION, Plugin, PluginDeclaration};

fn reverse(arg: &str) -> String {
    arg.chars().rev().collect()
}

#[allow(non_upper_case_globals)]
#[unsafe(no_mangle)]
pub static plugin: PluginDeclaration = PluginDeclaration {
    api_version: API_VERSION + 1,
    plugin: Plugin::format_function("reverse", reverse),
};
