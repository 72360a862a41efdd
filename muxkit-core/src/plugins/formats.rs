//! Format-variable table for plugin-provided format variables

use std::collections::BTreeMap;

use muxkit_plugin_api::{FormatContext, FormatPlugin, Plugin, PluginKind};

use super::store::PluginStore;

/// Format variables pulled out of the plugin store, in registration order
#[derive(Debug, Default)]
pub struct FormatTable {
    entries: Vec<FormatPlugin>,
}

impl FormatTable {
    /// Collect every format descriptor from `store`
    pub fn from_store(store: &PluginStore) -> Self {
        let entries = store
            .indices_of_kind(PluginKind::Format)
            .filter_map(|index| match store.get(index) {
                Some(Plugin::Format(format)) => Some(*format),
                _ => None,
            })
            .collect();
        Self { entries }
    }

    /// Render the variable `name`, if a plugin provides it
    pub fn value(&self, name: &str, ctx: &FormatContext) -> Option<String> {
        self.entries
            .iter()
            .find(|format| format.name == name)
            .map(|format| (format.cb)(ctx))
    }

    /// Render every provided variable.
    ///
    /// When two plugins provide the same variable the earlier one is used.
    pub fn render(&self, ctx: &FormatContext) -> BTreeMap<&'static str, String> {
        let mut values = BTreeMap::new();
        for format in &self.entries {
            values
                .entry(format.name)
                .or_insert_with(|| (format.cb)(ctx));
        }
        values
    }

    /// Names of all provided variables in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|format| format.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
