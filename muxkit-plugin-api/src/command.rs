//! Command types for plugin-provided host commands

use crate::context::{CommandArgs, CommandContext};

/// Signature of a command's execution callback
pub type CommandExecFn = fn(&CommandArgs, &mut CommandContext) -> CommandReturn;

/// A host command provided by a plugin, e.g. `print FILENAME TEXT`
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    /// Command name, used as `muxkit <name>`
    pub name: &'static str,
    /// Optional short alias for the name
    pub alias: Option<&'static str>,
    /// Accepted positional argument counts
    pub args: ArgBounds,
    /// Usage string shown on arity errors, e.g. "filename text"
    pub usage: &'static str,
    /// Execution callback
    pub exec: CommandExecFn,
}

impl CommandEntry {
    /// Whether `name` selects this command, either by name or by alias
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.alias == Some(name)
    }
}

/// Positional argument bounds for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgBounds {
    /// Minimum number of positional arguments
    pub lower: usize,
    /// Maximum number of positional arguments, `None` for unbounded
    pub upper: Option<usize>,
}

impl ArgBounds {
    /// Exactly `count` positional arguments
    pub const fn exactly(count: usize) -> Self {
        Self {
            lower: count,
            upper: Some(count),
        }
    }

    /// At least `lower` positional arguments
    pub const fn at_least(lower: usize) -> Self {
        Self {
            lower,
            upper: None,
        }
    }

    /// Check whether `count` positional arguments are accepted
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.lower && self.upper.is_none_or(|upper| count <= upper)
    }
}

/// Result of executing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandReturn {
    /// Command finished normally
    Normal,
    /// Command asks the host to stop processing the queue
    Stop,
    /// Command asks the host to wait before the next queued item
    Wait,
    /// Command failed; details are in the context's errors
    Error,
}

impl CommandReturn {
    /// Process exit code for this result
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Normal | Self::Stop | Self::Wait => 0,
            Self::Error => 1,
        }
    }
}
