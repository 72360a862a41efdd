//! Command table for plugin-provided commands

use muxkit_plugin_api::{
    CommandArgs, CommandContext, CommandEntry, CommandReturn, Plugin, PluginKind,
};

use super::error::CommandError;
use super::store::PluginStore;

/// Commands pulled out of the plugin store, in registration order
#[derive(Debug, Default)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    /// Collect every command descriptor from `store`
    pub fn from_store(store: &PluginStore) -> Self {
        let entries = store
            .indices_of_kind(PluginKind::Command)
            .filter_map(|index| match store.get(index) {
                Some(Plugin::Command(entry)) => Some(*entry),
                _ => None,
            })
            .collect();
        Self { entries }
    }

    /// Find a command by name or alias.
    ///
    /// The earliest registration wins when several commands share a name.
    pub fn find(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.matches(name))
    }

    /// Check the arguments against the command's bounds and run it
    pub fn execute(
        &self,
        name: &str,
        args: &CommandArgs,
        ctx: &mut CommandContext,
    ) -> Result<CommandReturn, CommandError> {
        let entry = self
            .find(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

        if args.len() < entry.args.lower {
            return Err(CommandError::TooFewArguments {
                name: entry.name.to_string(),
                usage: entry.usage.to_string(),
            });
        }
        if !entry.args.accepts(args.len()) {
            return Err(CommandError::TooManyArguments {
                name: entry.name.to_string(),
                usage: entry.usage.to_string(),
            });
        }

        tracing::debug!(command = entry.name, argc = args.len(), "Executing plugin command");
        Ok((entry.exec)(args, ctx))
    }

    /// All commands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
