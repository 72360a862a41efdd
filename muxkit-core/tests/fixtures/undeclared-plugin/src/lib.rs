//! A shared library without a `plugin` symbol

use muxkit_plugin_api::API_VERSION;

#[unsafe(no_mangle)]
pub extern "C" fn undeclared_api_version() -> u32 {
    API_VERSION
}
