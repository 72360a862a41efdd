//! Host-side values handed to plugin callbacks

use std::collections::BTreeMap;

/// Positional arguments passed to a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    argv: Vec<String>,
}

impl CommandArgs {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    /// Number of positional arguments
    pub fn len(&self) -> usize {
        self.argv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Positional argument at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.argv.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.argv.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CommandArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Execution context of one queued command.
///
/// Commands report back through this rather than writing to the terminal
/// themselves; the host decides where output and errors end up.
#[derive(Debug, Default)]
pub struct CommandContext {
    output: Vec<String>,
    errors: Vec<String>,
}

impl CommandContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line of normal output
    pub fn print(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// Append an error line
    pub fn error(&mut self, line: impl Into<String>) {
        self.errors.push(line.into());
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Variables already known to the host's format engine when a format
/// plugin is asked for its value.
#[derive(Debug, Clone, Default)]
pub struct FormatContext {
    values: BTreeMap<String, String>,
}

impl FormatContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormatContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A host event delivered to notification plugins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyEntry {
    /// Event name, e.g. "window-renamed"
    pub name: String,
    /// Session the event concerns, if any
    pub session: Option<String>,
    /// Window the event concerns, if any
    pub window: Option<String>,
    /// Pane the event concerns, if any
    pub pane: Option<String>,
}

impl NotifyEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
