//! PluginStore - ordered storage of registered plugin descriptors

use muxkit_plugin_api::Plugin;

/// Capacity of the backing buffer right after [`PluginStore::init`]
pub const INITIAL_CAPACITY: usize = 1;

/// Growth stops here; doubling past it would overflow a 32-bit signed counter
pub const MAX_CAPACITY: usize = (i32::MAX / 2) as usize;

/// Ordered collection of leaf plugin descriptors.
///
/// Entries keep their registration order, which is also their dispatch
/// priority. Composites are flattened on the way in, so a stored entry is
/// never [`Plugin::Multi`]. There is no removal.
#[derive(Debug, Default)]
pub struct PluginStore {
    /// `None` until [`PluginStore::init`] runs
    entries: Option<Vec<Plugin>>,
    /// Logical capacity, doubled from [`INITIAL_CAPACITY`] whenever full
    capacity: usize,
}

impl PluginStore {
    /// Allocate the backing buffer.
    ///
    /// # Panics
    ///
    /// Panics if the store was already initialized.
    pub fn init(&mut self) {
        if self.entries.is_some() {
            tracing::error!("plugin store initialized twice");
            panic!("PluginStore::init must be called only once");
        }
        self.capacity = INITIAL_CAPACITY;
        self.entries = Some(Vec::with_capacity(INITIAL_CAPACITY));
    }

    /// Whether [`PluginStore::init`] has run
    pub fn is_initialized(&self) -> bool {
        self.entries.is_some()
    }

    /// Register a descriptor, flattening composites depth-first.
    ///
    /// Returns the number of leaf descriptors appended.
    ///
    /// # Panics
    ///
    /// Panics if the store is not initialized, or if growing it would pass
    /// [`MAX_CAPACITY`].
    pub fn register(&mut self, plugin: Plugin) -> usize {
        match plugin {
            Plugin::Multi(children) => children.iter().map(|child| self.register(*child)).sum(),
            leaf => {
                self.reserve_slot();
                self.entries_mut().push(leaf);
                tracing::trace!(
                    kind = %leaf.kind(),
                    name = leaf.display_name(),
                    index = self.len() - 1,
                    "Plugin registered"
                );
                1
            }
        }
    }

    /// Number of leaf descriptors stored
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current logical capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Descriptor at `index`, in registration order
    pub fn get(&self, index: usize) -> Option<&Plugin> {
        self.as_slice().get(index)
    }

    /// All descriptors in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, Plugin> {
        self.as_slice().iter()
    }

    /// Display names of all descriptors, comma-joined in registration order.
    ///
    /// Empty when nothing is registered.
    pub fn plugin_list(&self) -> String {
        self.iter()
            .map(Plugin::display_name)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn as_slice(&self) -> &[Plugin] {
        self.entries.as_deref().unwrap_or_default()
    }

    fn entries_mut(&mut self) -> &mut Vec<Plugin> {
        let Some(entries) = self.entries.as_mut() else {
            panic!("PluginStore used before init");
        };
        entries
    }

    /// Make room for one more leaf, doubling the capacity when full
    fn reserve_slot(&mut self) {
        let len = self.entries_mut().len();
        if len >= self.capacity {
            self.capacity = grow_capacity(self.capacity);
            let additional = self.capacity - len;
            self.entries_mut().reserve_exact(additional);
        }
    }
}

impl<'a> IntoIterator for &'a PluginStore {
    type Item = &'a Plugin;
    type IntoIter = std::slice::Iter<'a, Plugin>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Next capacity after `capacity`.
///
/// # Panics
///
/// Panics when `capacity` has reached [`MAX_CAPACITY`].
pub(crate) fn grow_capacity(capacity: usize) -> usize {
    if capacity >= MAX_CAPACITY {
        tracing::error!(capacity, "plugin store capacity overflow");
        panic!("plugin store capacity overflow");
    }
    capacity * 2
}
