//! Lookup and invocation of registered plugins
//!
//! Every lookup is a linear scan in registration order. Single-valued lookups
//! (format functions, kind search) stop at the first match; notifications fan
//! out to every matching listener.

use muxkit_plugin_api::{NotifyEntry, Plugin, PluginKind};

use super::store::PluginStore;

impl PluginStore {
    /// Call the format function `name` with `arg`.
    ///
    /// Returns an empty string when no such function is registered.
    pub fn call_function(&self, name: &str, arg: &str) -> String {
        self.iter()
            .find_map(|plugin| match plugin {
                Plugin::FormatFunction(function) if function.name == name => Some(function),
                _ => None,
            })
            .map(|function| (function.cb)(arg))
            .unwrap_or_default()
    }

    /// Deliver `entry` to every notification plugin listening for it
    pub fn notify(&self, entry: &NotifyEntry) {
        for plugin in self {
            if let Plugin::Notification(notification) = plugin
                && notification.wants(&entry.name)
            {
                (notification.cb)(entry);
            }
        }
    }

    /// Index of the first entry of `kind`
    pub fn find_first_of_kind(&self, kind: PluginKind) -> Option<usize> {
        self.iter().position(|plugin| plugin.kind() == kind)
    }

    /// Index of the next entry of `kind` strictly after `after`
    pub fn find_next_of_kind(&self, kind: PluginKind, after: usize) -> Option<usize> {
        self.iter()
            .enumerate()
            .skip(after.saturating_add(1))
            .find(|(_, plugin)| plugin.kind() == kind)
            .map(|(index, _)| index)
    }

    /// Indices of all entries of `kind`, in registration order
    pub fn indices_of_kind(&self, kind: PluginKind) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.find_first_of_kind(kind), move |&index| {
            self.find_next_of_kind(kind, index)
        })
    }
}
